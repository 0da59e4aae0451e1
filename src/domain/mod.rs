// ============================================================================
// Domain Module
// Thai word tables and transcriber configuration
// ============================================================================

pub mod config;
pub mod lexicon;

pub use config::{CentsRounding, TranscriberConfig};
