//! Error types for the skilltree binary.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end a CLI run.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading an input file failed.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset or config could not be used.
    #[error(transparent)]
    Layout(#[from] skilltree_layout::Error),

    /// Config or output JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad command line.
    #[error("{0}")]
    Usage(String),
}
