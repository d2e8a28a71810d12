//! Error types for the training engine.

use thiserror::Error;

/// Result type alias using [`DrillError`].
pub type Result<T> = std::result::Result<T, DrillError>;

/// Conditions the engine signals to its caller.
///
/// Everything else (short distractor pools, missing or corrupt progress)
/// degrades to a valid default instead of failing.
#[derive(Debug, Error)]
pub enum DrillError {
    #[error("catalog contains no words")]
    EmptyCatalog,

    #[error("invalid catalog data: {0}")]
    InvalidCatalog(#[source] serde_json::Error),

    #[error("invalid drill configuration: {0}")]
    InvalidConfig(#[source] serde_json::Error),
}
