//! Error types for skilltree-layout.
//!
//! Layout itself is total. Only loading a dataset from text and validating
//! a configuration can fail.

use thiserror::Error;

/// Result type for skilltree-layout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the loading surfaces of the layout crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The input was not JSON at all.
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value would make placement meaningless.
    #[error("invalid layout config: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}
