// ============================================================================
// Thai Baht Text Library
// Written-out Thai representation of decimal monetary amounts
// ============================================================================

//! # Thai Baht Text
//!
//! Converts a non-negative decimal amount into Thai words with baht and
//! satang units, e.g. `1234.56` → `หนึ่งพันสองร้อยสามสิบสี่บาทห้าสิบหกสตางค์`.
//!
//! ## Features
//!
//! - **Exact decimal input** via `rust_decimal` (no floating point)
//! - **Unbounded magnitude** through the recursive ล้าน (million) multiplier
//! - **Irregular forms** สิบ / ยี่สิบ / เอ็ด as an explicit decision table
//! - **Configurable satang rounding** (truncate by default)
//! - **Line-oriented batch input** with pluggable output sinks
//!
//! ## Example
//!
//! ```rust
//! use thai_baht_text::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let text = transcribe_amount(Decimal::new(123456, 2)).unwrap();
//! assert_eq!(text, "หนึ่งพันสองร้อยสามสิบสี่บาทห้าสิบหกสตางค์");
//!
//! // Whole amounts end in ถ้วน
//! assert_eq!(transcribe_amount(Decimal::from(100)).unwrap(), "หนึ่งร้อยบาทถ้วน");
//!
//! // Negative amounts are rejected
//! assert_eq!(
//!     transcribe_amount(Decimal::from(-1)),
//!     Err(TranscribeError::NegativeAmount)
//! );
//!
//! // Round half away from zero instead of truncating
//! let rounding = BahtTranscriber::new(TranscriberConfig::rounding_half_away());
//! assert_eq!(rounding.transcribe(Decimal::new(995, 3)).unwrap(), "หนึ่งบาทถ้วน");
//! ```

pub mod domain;
pub mod engine;
pub mod input;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CentsRounding, TranscriberConfig};
    pub use crate::engine::{transcribe_amount, transcribe_integer, BahtTranscriber};
    pub use crate::input::{parse_amount, process_file, process_reader, InputError};
    pub use crate::interfaces::{LineEvent, LoggingSink, NoOpSink, OutputSink, WriterSink};
    pub use crate::numeric::{AmountValue, TranscribeError, TranscribeResult};
}
