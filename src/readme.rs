use std::fs;

use handlebars::{no_escape, Handlebars};
use log::{debug, info};
use serde::Serialize;

use crate::config::Config;
use crate::db;
use crate::error::{Error, Result};
use crate::filters::{compact_empty_lines, tabs_to_spaces};
use crate::post::Post;
use crate::table;

/// Tag selecting the entries that appear in the README.
const POST_TAG: &str = "post";

const TABLE_HEADER: [&str; 2] = ["Date", "Title"];

#[derive(Serialize)]
struct ReadmeData {
    #[serde(rename = "allPosts")]
    all_posts: String,
}

/// Renders the post table, splices it into the README template and writes
/// the result. The database itself is never touched.
pub(crate) fn run(config: &Config) -> Result<()> {
    let posts = db::load(&config.db_path)?;
    let table = all_posts(&posts)?;

    // strict mode turns a placeholder without a provider into an error
    // instead of rendering nothing
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars.register_escape_fn(no_escape);
    handlebars
        .register_template_file("readme", &config.template_path)
        .map_err(|e| Error::template(&config.template_path, e))?;

    let data = ReadmeData {
        all_posts: compact_empty_lines(&tabs_to_spaces(&table)),
    };
    let readme = handlebars
        .render("readme", &data)
        .map_err(|e| Error::template(&config.template_path, e))?;

    fs::write(&config.output_path, &readme).map_err(|e| Error::write(&config.output_path, e))?;
    info!("wrote {}", config.output_path.display());
    Ok(())
}

/// The `allPosts` provider: every record tagged `post`, most recent first.
fn all_posts(posts: &[Post]) -> Result<String> {
    let mut entries = Vec::new();
    for post in posts.iter().filter(|p| p.tags.iter().any(|t| t == POST_TAG)) {
        entries.push((post.normalized_date()?, post));
    }
    // descending by date; sort_by is stable, so equal dates keep their
    // database order
    entries.sort_by(|a, b| b.0.cmp(&a.0));
    debug!("{} of {} posts selected", entries.len(), posts.len());

    let rows: Vec<Vec<String>> = entries
        .into_iter()
        .map(|(date, post)| vec![date, format!("[{}]({})", post.title, post.body)])
        .collect();
    Ok(table::render(&TABLE_HEADER, &rows))
}
