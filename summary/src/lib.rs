//! Ladder test-result summarizer.
//!
//! Reads a JSON array of result records emitted by the ladder test runner,
//! tallies outcomes, identifies the root failure and the tests it blocked,
//! and writes a fixed-structure Markdown report. One linear pass per run:
//! load, summarize, render, write. Nothing is retried and no state survives
//! the process.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//!
//! ladder_summary::run(
//!     Path::new("tmp/ladder-results.json"),
//!     Path::new("tmp/ladder-summary.md"),
//! )
//! .expect("Failed to summarize ladder results");
//! ```
//!
//! # Report Layout
//!
//! ```text
//! # Ladder Summary
//!
//! - Generated: <UTC instant>
//! - Input: `<input path>`
//!
//! ## Outcome            ← PASS / FAIL / BLOCKED tallies
//! ## Root cause         ← only when a FAIL record exists
//! ## Test matrix        ← one line per record, input order
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod loader;
pub mod record;
pub mod renderer;
pub mod summary;
pub mod writer;

use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

pub use record::{Outcome, ResultRecord};
pub use summary::{OutcomeCounts, Summary, summarize};

/// Fatal failures of a summarizer run.
///
/// Every variant aborts the run. Re-running the tool is the recovery
/// mechanism; nothing is retried in-process.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The input path does not exist. Detected before any read.
    #[error("Input not found: {}", .path.display())]
    MissingInput {
        /// The missing input path.
        path: PathBuf,
    },
    /// The input exists but could not be read as UTF-8 text.
    #[error("Failed to read {}", .path.display())]
    Read {
        /// The unreadable input path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The input is not a JSON array of record objects.
    #[error("Failed to parse {}", .path.display())]
    Parse {
        /// The malformed input path.
        path: PathBuf,
        /// Underlying JSON diagnostic.
        source: serde_json::Error,
    },
    /// The output path could not be written.
    #[error("Failed to write {}", .path.display())]
    Write {
        /// The unwritable output path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

/// Runs the whole pipeline: load the input, summarize it, render the
/// Markdown report, write it to `output_path`.
///
/// The generation timestamp is sampled here, once per run. Printing the
/// output path is left to the caller.
///
/// # Errors
///
/// Returns the first [`SummaryError`] encountered. Every failure is fatal
/// to the run; a failed write may leave a partial output file behind.
pub fn run(input_path: &Path, output_path: &Path) -> Result<(), SummaryError> {
    let records = loader::load_results(input_path)?;
    let summary = summarize(&records);
    let markdown = renderer::render_markdown(&records, &summary, input_path, Utc::now());
    writer::write_report(output_path, &markdown)
}
