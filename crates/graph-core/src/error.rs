// File: crates/graph-core/src/error.rs
// Summary: Error type shared by sampling and surface configuration.

use thiserror::Error;

/// Result alias for graph-core operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors raised by the core. Non-finite function values are never errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PlotError {
    /// A request or option was outside its valid domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PlotError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
