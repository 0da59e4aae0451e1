// ============================================================================
// Numeric Module
// Exact amount handling for baht text conversion
// ============================================================================
//
// This module provides:
// - AmountValue: validated non-negative amount split into baht and satang
// - DigitGroup: six-digit block transcribed before a "million" multiplier
// - TranscribeError: the single error kind of the transcription core
//
// Design principles:
// - No floating-point operations
// - Validation returns Result (no panics)
// - Magnitude bounded only by rust_decimal's range

mod amount;
mod digit_group;
mod errors;

pub use amount::{AmountValue, SATANG_PER_BAHT};
pub use digit_group::{DigitGroup, GROUP_RADIX, GROUP_WIDTH};
pub use errors::{TranscribeError, TranscribeResult};
