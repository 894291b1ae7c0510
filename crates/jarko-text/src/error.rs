//! Error types for text normalization.

use thiserror::Error;

/// Errors that can occur while normalizing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    // === Argument Validation ===
    /// The text argument was null or has no textual representation.
    #[error("invalid input to {function}: {reason}")]
    InvalidInput {
        function: &'static str,
        reason: String,
    },

    /// A configuration argument has the wrong shape.
    #[error("invalid argument '{parameter}': {reason}")]
    InvalidArgument { parameter: String, reason: String },

    // === DataFrame Errors ===
    /// Column not found in DataFrame.
    #[error("column '{column}' not found in DataFrame")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl TextError {
    pub(crate) fn null_input(function: &'static str) -> Self {
        Self::InvalidInput {
            function,
            reason: "text must not be null".to_string(),
        }
    }

    pub(crate) fn invalid_argument(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for failures caused by the text argument itself.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Returns true for failures caused by a configuration argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

impl From<polars::prelude::PolarsError> for TextError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, TextError>;
