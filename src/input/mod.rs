// ============================================================================
// Input Module
// Reads decimal amounts from text and drives the transcriber over them
// ============================================================================

mod errors;
mod reader;

pub use errors::{InputError, InputResult};
pub use reader::{
    parse_amount, process_file, process_reader, AmountLine, AmountReader, ProcessSummary,
};
