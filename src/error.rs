use std::path::PathBuf;

use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, Error>;

/// Failure modes of the two batch jobs. Nothing is recovered or retried;
/// any of these aborts the whole run.
#[derive(Error, Debug)]
pub(crate) enum Error {
    /// Source file missing, unreadable, or not a well-formed JSON array.
    #[error("cannot read {}: {cause}", .path.display())]
    Read { path: PathBuf, cause: anyhow::Error },

    /// Destination not writable.
    #[error("cannot write {}: {cause}", .path.display())]
    Write { path: PathBuf, cause: anyhow::Error },

    /// `date` stored as an empty list.
    #[error("post {title:?} has an empty date list")]
    MalformedDate { title: String },

    /// Template file missing, or a placeholder references an unknown provider.
    #[error("template {}: {cause}", .path.display())]
    Template { path: PathBuf, cause: anyhow::Error },
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, cause: impl Into<anyhow::Error>) -> Self {
        Error::Read {
            path: path.into(),
            cause: cause.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, cause: impl Into<anyhow::Error>) -> Self {
        Error::Write {
            path: path.into(),
            cause: cause.into(),
        }
    }

    pub fn template(path: impl Into<PathBuf>, cause: impl Into<anyhow::Error>) -> Self {
        Error::Template {
            path: path.into(),
            cause: cause.into(),
        }
    }
}
