// ============================================================================
// Numeric Errors
// Error types for amount validation
// ============================================================================

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while preparing an amount for transcription.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TranscribeError {
    /// Amount is below zero. Negative zero is not an error.
    #[error("negative amount: Thai baht text is only defined for amounts >= 0")]
    NegativeAmount,
}

/// Result type alias for transcription operations
pub type TranscribeResult<T> = Result<T, TranscribeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TranscribeError::NegativeAmount.to_string(),
            "negative amount: Thai baht text is only defined for amounts >= 0"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&TranscribeError::NegativeAmount);
    }
}
