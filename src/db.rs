use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{Error, Result};
use crate::post::Post;

pub(crate) fn load(path: &Path) -> Result<Vec<Post>> {
    let fd = File::open(path).map_err(|e| Error::read(path, e))?;
    let reader = BufReader::new(fd);
    let posts: Vec<Post> = serde_json::from_reader(reader).map_err(|e| Error::read(path, e))?;
    debug!("loaded {} posts from {}", posts.len(), path.display());
    Ok(posts)
}

// The database is kept tab-indented, so the whole file is rewritten with
// serde_json's pretty formatter rather than `to_writer_pretty`.
pub(crate) fn save(path: &Path, posts: &[Post]) -> Result<()> {
    let fd = File::create(path).map_err(|e| Error::write(path, e))?;
    let mut writer = BufWriter::new(fd);
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    posts
        .serialize(&mut ser)
        .map_err(|e| Error::write(path, e))?;
    writer.write_all(b"\n").map_err(|e| Error::write(path, e))?;
    writer.flush().map_err(|e| Error::write(path, e))?;
    Ok(())
}
