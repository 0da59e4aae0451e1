// ============================================================================
// Engine Module
// Core numeral-to-Thai-text transcription
// ============================================================================

mod group;
mod integer;
mod transcriber;

pub use group::{transcribe_group, DigitForm};
pub use integer::transcribe_integer;
pub use transcriber::{transcribe_amount, BahtTranscriber};
