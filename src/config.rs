use std::path::PathBuf;

/// Paths for one invocation. Built in `main` from the CLI and passed into
/// each job, so tests can point the jobs at temporary files.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub db_path: PathBuf,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
}
