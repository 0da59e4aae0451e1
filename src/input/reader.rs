// ============================================================================
// Amount Reader
// Line-oriented decimal input feeding the transcriber
// ============================================================================

use super::errors::{InputError, InputResult};
use crate::engine::BahtTranscriber;
use crate::interfaces::{LineEvent, OutputSink};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{BufRead, BufReader, Split};
use std::path::Path;
use std::str::FromStr;

// ============================================================================
// Parsing
// ============================================================================

/// Significant digits a `Decimal` holds without rounding
const MAX_DIGITS: usize = 28;

/// Parse a decimal amount from text.
///
/// Surrounding whitespace is ignored. Accepts plain notation (`-12.50`,
/// `.5`, `42`) and scientific notation (`1.5e3`). Fraction digits beyond
/// what a `Decimal` can hold are dropped, never rounded into the kept ones.
///
/// # Errors
/// Returns `MalformedNumber` if the text is not a decimal number.
pub fn parse_amount(text: &str) -> InputResult<Decimal> {
    let trimmed = text.trim();
    let parsed = if trimmed.contains(['e', 'E']) {
        Decimal::from_scientific(trimmed)
    } else {
        Decimal::from_str(fit_fraction(trimmed))
    };

    parsed.map_err(|e| InputError::MalformedNumber {
        raw: trimmed.to_string(),
        reason: e.to_string(),
    })
}

/// Cut the fraction of plain-notation `text` so integer and fraction digits
/// together fit in `MAX_DIGITS`.
///
/// Left untouched when there is no fraction or it is not all digits, so
/// malformed text still reaches the parser.
fn fit_fraction(text: &str) -> &str {
    let Some((whole, fraction)) = text.split_once('.') else {
        return text;
    };
    if !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return text;
    }

    let significant = whole
        .trim_start_matches(['+', '-'])
        .trim_start_matches('0')
        .bytes()
        .filter(u8::is_ascii_digit)
        .count();
    let keep = MAX_DIGITS.saturating_sub(significant);

    match keep {
        _ if fraction.len() <= keep => text,
        0 => whole,
        _ => &text[..whole.len() + 1 + keep],
    }
}

// ============================================================================
// Line Reader
// ============================================================================

/// One non-blank input line
#[derive(Debug)]
pub struct AmountLine {
    /// 1-based line number in the input
    pub line_number: usize,
    /// Line content with surrounding whitespace removed. Bytes that are not
    /// UTF-8 are shown as U+FFFD.
    pub raw: String,
    /// Parsed amount, or `MalformedNumber` (also for non-UTF-8 lines)
    pub parsed: InputResult<Decimal>,
}

/// Iterator over the non-blank lines of a reader, each parsed as a decimal.
///
/// Yields `Err(Resource)` when the underlying reader fails. A line that is
/// not valid UTF-8 is yielded as malformed, like any other bad number.
pub struct AmountReader<R> {
    lines: Split<R>,
    line_number: usize,
}

impl<R: BufRead> AmountReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.split(b'\n'),
            line_number: 0,
        }
    }
}

impl<R: BufRead> Iterator for AmountReader<R> {
    type Item = InputResult<AmountLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let bytes = match self.lines.next()? {
                Ok(bytes) => bytes,
                Err(e) => return Some(Err(InputError::resource("error reading file", e))),
            };
            self.line_number += 1;

            let line = match String::from_utf8(bytes) {
                Ok(line) => line,
                Err(e) => {
                    let raw = String::from_utf8_lossy(e.as_bytes()).trim().to_string();
                    tracing::debug!(line = self.line_number, "Line is not valid UTF-8");
                    return Some(Ok(AmountLine {
                        line_number: self.line_number,
                        parsed: Err(InputError::MalformedNumber {
                            raw: raw.clone(),
                            reason: e.utf8_error().to_string(),
                        }),
                        raw,
                    }));
                }
            };

            let raw = line.trim();
            if raw.is_empty() {
                continue;
            }

            return Some(Ok(AmountLine {
                line_number: self.line_number,
                raw: raw.to_string(),
                parsed: parse_amount(raw),
            }));
        }
    }
}

// ============================================================================
// Batch Processing
// ============================================================================

/// Counts of line outcomes for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub transcribed: usize,
    pub malformed: usize,
    pub rejected: usize,
}

impl ProcessSummary {
    /// Non-blank lines seen
    pub fn total(&self) -> usize {
        self.transcribed + self.malformed + self.rejected
    }

    fn record(&mut self, event: &LineEvent) {
        match event {
            LineEvent::Transcribed { .. } => self.transcribed += 1,
            LineEvent::Malformed { .. } => self.malformed += 1,
            LineEvent::Rejected { .. } => self.rejected += 1,
        }
    }
}

/// Transcribe every non-blank line of `reader` into `sink`.
///
/// Malformed and negative lines are reported to the sink and skipped.
///
/// # Errors
/// Returns `Resource` if reading the input or writing to the sink fails.
pub fn process_reader<R, S>(
    reader: R,
    transcriber: &BahtTranscriber,
    sink: &mut S,
) -> InputResult<ProcessSummary>
where
    R: BufRead,
    S: OutputSink + ?Sized,
{
    let mut summary = ProcessSummary::default();

    for line in AmountReader::new(reader) {
        let AmountLine {
            line_number,
            raw,
            parsed,
        } = line?;

        let event = match parsed {
            Ok(amount) => match transcriber.transcribe(amount) {
                Ok(text) => LineEvent::Transcribed {
                    line_number,
                    amount,
                    text,
                },
                Err(error) => LineEvent::Rejected {
                    line_number,
                    raw,
                    error,
                },
            },
            Err(InputError::MalformedNumber { reason, .. }) => LineEvent::Malformed {
                line_number,
                raw,
                reason,
            },
            Err(fatal) => return Err(fatal),
        };

        summary.record(&event);
        sink.on_event(event)
            .map_err(|e| InputError::resource("error writing output", e))?;
    }

    tracing::debug!(
        total = summary.total(),
        transcribed = summary.transcribed,
        malformed = summary.malformed,
        rejected = summary.rejected,
        "Finished processing input"
    );
    Ok(summary)
}

/// Open `path` and transcribe each of its lines into `sink`.
///
/// # Errors
/// Returns `Resource` if the file cannot be opened or read, or the sink
/// fails.
pub fn process_file<P, S>(
    path: P,
    transcriber: &BahtTranscriber,
    sink: &mut S,
) -> InputResult<ProcessSummary>
where
    P: AsRef<Path>,
    S: OutputSink + ?Sized,
{
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "Processing input file");

    let file = File::open(path).map_err(|e| InputError::resource("error opening file", e))?;
    process_reader(BufReader::new(file), transcriber, sink)
}
