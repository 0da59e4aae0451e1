// ============================================================================
// Output Sink Interface
// Defines the contract for consuming per-line conversion results
// ============================================================================

use crate::numeric::TranscribeError;
use rust_decimal::Decimal;
use std::io::{self, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of one non-blank input line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineEvent {
    /// Line parsed and transcribed
    Transcribed {
        line_number: usize,
        amount: Decimal,
        text: String,
    },

    /// Line is not a decimal number
    Malformed {
        line_number: usize,
        raw: String,
        reason: String,
    },

    /// Line parsed but the amount cannot be transcribed
    Rejected {
        line_number: usize,
        raw: String,
        error: TranscribeError,
    },
}

/// Sink for line events.
/// Implementations can print results, log them, collect them, etc.
pub trait OutputSink {
    /// Handle a line event
    fn on_event(&mut self, event: LineEvent) -> io::Result<()>;

    /// Batch handler
    fn on_events(&mut self, events: Vec<LineEvent>) -> io::Result<()> {
        for event in events {
            self.on_event(event)?;
        }
        Ok(())
    }
}

/// Discards every event
pub struct NoOpSink;

impl OutputSink for NoOpSink {
    fn on_event(&mut self, _event: LineEvent) -> io::Result<()> {
        Ok(())
    }
}

/// Logs every event through `tracing`
pub struct LoggingSink;

impl OutputSink for LoggingSink {
    fn on_event(&mut self, event: LineEvent) -> io::Result<()> {
        match &event {
            LineEvent::Transcribed {
                line_number,
                amount,
                text,
            } => tracing::debug!(line_number, %amount, %text, "Transcribed line"),
            LineEvent::Malformed {
                line_number,
                raw,
                reason,
            } => tracing::warn!(line_number, %raw, %reason, "Skipped malformed line"),
            LineEvent::Rejected {
                line_number,
                raw,
                error,
            } => tracing::warn!(line_number, %raw, %error, "Skipped rejected amount"),
        }
        Ok(())
    }
}

/// Writes one line per event: the Thai text on success, an error message
/// otherwise.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn on_event(&mut self, event: LineEvent) -> io::Result<()> {
        match event {
            LineEvent::Transcribed { text, .. } => writeln!(self.writer, "{}", text),
            LineEvent::Malformed { raw, reason, .. } => {
                writeln!(self.writer, "Error converting '{}': {}", raw, reason)
            }
            LineEvent::Rejected { raw, error, .. } => {
                writeln!(self.writer, "Error converting '{}': {}", raw, error)
            }
        }
    }
}

/// Collects events in memory
impl OutputSink for Vec<LineEvent> {
    fn on_event(&mut self, event: LineEvent) -> io::Result<()> {
        self.push(event);
        Ok(())
    }
}

/// Forwards each event to both sinks, first to second
impl<A: OutputSink, B: OutputSink> OutputSink for (A, B) {
    fn on_event(&mut self, event: LineEvent) -> io::Result<()> {
        self.0.on_event(event.clone())?;
        self.1.on_event(event)
    }
}
