// ============================================================================
// Baht Text CLI
// Transcribes every amount in a text file, one result per line
// ============================================================================

//! # Usage
//!
//! ```bash
//! baht-text amounts.txt
//! RUST_LOG=debug baht-text amounts.txt
//! ```
//!
//! Each non-blank line of the input is parsed as a decimal amount and its
//! Thai text is printed to stdout. Malformed or negative lines print an error
//! message and are skipped.
//!
//! # Exit Codes
//!
//! - 0: Success (including runs with skipped lines)
//! - 1: Missing argument, file not found, or read error

use clap::error::ErrorKind;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process;
use thai_baht_text::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Write decimal amounts out as Thai baht text")]
struct Args {
    /// File with one decimal amount per line
    input_file: PathBuf,
}

/// Logs go to stderr so stdout carries only results.
///
/// - `RUST_LOG=debug` - Show every transcribed line
/// - Default: errors only
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    init_tracing();

    let transcriber = BahtTranscriber::default();
    let mut sink = (WriterSink::new(io::stdout().lock()), LoggingSink);

    if let Err(e) = process_file(&args.input_file, &transcriber, &mut sink) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
