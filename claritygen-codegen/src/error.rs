//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// ABI parsing error.
    #[error("ABI parse error: {0}")]
    Parse(#[from] claritygen_abi::ParseError),

    /// ABI validation error.
    #[error("ABI error: {0}")]
    Abi(#[from] claritygen_abi::AbiError),

    /// JSON serialization error while embedding an ABI constant.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}
