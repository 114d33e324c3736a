use log::info;

use crate::config::Config;
use crate::db;
use crate::error::Result;
use crate::post::{Post, PostDate};

/// Rewrites the post database in canonical form: no `colors`, a plain
/// day-precision `date`, tags sorted. Record order is preserved.
pub(crate) fn run(config: &Config) -> Result<()> {
    let mut posts = db::load(&config.db_path)?;
    for post in posts.iter_mut() {
        sanitize_post(post)?;
    }
    db::save(&config.db_path, &posts)?;
    info!(
        "sanitized {} posts in {}",
        posts.len(),
        config.db_path.display()
    );
    Ok(())
}

fn sanitize_post(post: &mut Post) -> Result<()> {
    post.colors = None;
    post.date = PostDate::Plain(post.normalized_date()?);
    post.tags.sort();
    Ok(())
}
