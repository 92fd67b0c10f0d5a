//! `ladder-summarize` — Renders a Markdown summary of ladder test results.
//!
//! **Outputs:**
//! - `<output>` — Fixed-structure Markdown report (full overwrite each run)
//! - The resolved output path on stdout
//!
//! **Usage:**
//! ```
//! ladder-summarize [INPUT] [OUTPUT]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ladder_summary::run;

/// Summarize ladder test results into a Markdown report.
#[derive(Parser)]
#[command(
    name = "ladder-summarize",
    about = "Summarize ladder test results into a Markdown report"
)]
struct Args {
    /// Input JSON file: an array of ladder result records.
    #[arg(default_value = "tmp/ladder-results.json")]
    input: PathBuf,

    /// Output path for the rendered Markdown summary.
    #[arg(default_value = "tmp/ladder-summary.md")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    run(&args.input, &args.output)?;

    println!("{}", args.output.display());
    Ok(())
}
