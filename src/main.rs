use std::path::PathBuf;

use clap::{command, Arg, Command};

mod config;
mod db;
mod error;
mod filters;
mod post;
mod readme;
mod sanitize;
mod table;

use config::Config;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .subcommand_required(true)
        .arg_required_else_help(true)
        .args([
            Arg::new("db")
                .long("db")
                .help("Path of the post database")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("assets/_db.json"),
            Arg::new("template")
                .long("template")
                .help("Path of the README template")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("tpl.readme.md"),
            Arg::new("out")
                .long("out")
                .help("Path of the rendered README")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("README.md"),
        ])
        .subcommand(Command::new("sanitize").about("Rewrite the post database in canonical form"))
        .subcommand(Command::new("readme").about("Render the post table into the README"))
        .get_matches();

    let config = Config {
        db_path: matches.get_one::<PathBuf>("db").unwrap().clone(),
        template_path: matches.get_one::<PathBuf>("template").unwrap().clone(),
        output_path: matches.get_one::<PathBuf>("out").unwrap().clone(),
    };

    match matches.subcommand() {
        Some(("sanitize", _)) => sanitize::run(&config)?,
        Some(("readme", _)) => readme::run(&config)?,
        _ => unreachable!(),
    }

    Ok(())
}
