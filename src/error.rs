use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImportError>;

#[derive(Debug, Error)]
pub enum ImportError {
    /// The export file could not be read or is not well-formed XML
    #[error("Error parsing export file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Unrecognized entry kind: {0}")]
    UnrecognizedEntryKind(String),

    #[error("Comment references unknown post {0}")]
    UnresolvedCommentParent(String),

    #[error("Entry {entry} has no {field}")]
    MissingField { entry: String, field: &'static str },

    #[error("Invalid published date {value}: {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("Error writing {path}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ImportError {
    pub fn fs(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ImportError::Filesystem { path: path.into(), source }
    }
}
