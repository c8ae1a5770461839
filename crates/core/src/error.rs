//! Error types for model-bench-core (WASM-compatible)

use thiserror::Error;

/// Result type alias for model-bench-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that work in both native and WASM environments
#[derive(Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("invalid record for model `{model}`: {reason}")]
    InvalidRecord { model: String, reason: String },
}
