// ============================================================================
// Input Errors
// Failures of the line-oriented amount reader
// ============================================================================

use std::io;
use thiserror::Error;

/// Errors raised while reading amounts from text input.
#[derive(Debug, Error)]
pub enum InputError {
    /// Text is not a decimal number. Non-fatal when reading a file.
    #[error("invalid decimal '{raw}': {reason}")]
    MalformedNumber { raw: String, reason: String },

    /// Input could not be opened, read, or output could not be written.
    /// Fatal.
    #[error("{context}: {source}")]
    Resource {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl InputError {
    pub(crate) fn resource(context: impl Into<String>, source: io::Error) -> Self {
        InputError::Resource {
            context: context.into(),
            source,
        }
    }
}

/// Result type alias for input operations
pub type InputResult<T> = Result<T, InputError>;
