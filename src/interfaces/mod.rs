// ============================================================================
// Interfaces Module
// Collaborator contracts around the transcription core
// ============================================================================

pub mod output_sink;

pub use output_sink::{LineEvent, LoggingSink, NoOpSink, OutputSink, WriterSink};
