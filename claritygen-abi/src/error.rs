//! Error types for ABI parsing and validation.

use thiserror::Error;

/// Error type for ABI parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing required field.
    #[error("missing required field '{field}' in ABI document")]
    MissingField {
        /// Field name.
        field: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Creates a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

/// Error type for ABI validation.
#[derive(Debug, Error)]
pub enum AbiError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Duplicate function name.
    #[error("duplicate function name '{name}' in contract ABI")]
    DuplicateFunction {
        /// Function name.
        name: String,
    },

    /// Duplicate argument name within one function.
    #[error("duplicate argument name '{argument}' in function '{function}'")]
    DuplicateArgument {
        /// Function name.
        function: String,
        /// Argument name.
        argument: String,
    },

    /// Invalid domain identifier.
    #[error("invalid identifier '{name}': {reason}")]
    InvalidIdentifier {
        /// Offending identifier.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl AbiError {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
