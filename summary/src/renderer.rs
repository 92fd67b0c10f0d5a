//! Markdown rendering of a summarized result set.
//!
//! The layout is fixed: title, generation metadata, outcome tallies, an
//! optional root-cause section, then the full test matrix. Sections are
//! joined by single blank lines and the document ends with exactly one
//! trailing newline.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::record::ResultRecord;
use crate::summary::{OutcomeCounts, Summary};

/// Renders the complete summary document.
///
/// `generated_at` is injected rather than sampled here so the rendering is
/// a pure function of its inputs; [`crate::run`] passes the current UTC
/// instant.
#[must_use]
pub fn render_markdown(
    records: &[ResultRecord],
    summary: &Summary,
    input_path: &Path,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::with_capacity(4096);
    render_header(&mut out, input_path, generated_at);
    render_outcome(&mut out, &summary.counts);
    render_root_cause(&mut out, summary);
    render_matrix(&mut out, records);
    out
}

fn render_header(out: &mut String, input_path: &Path, generated_at: DateTime<Utc>) {
    let _ = writeln!(out, "# Ladder Summary");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "- Generated: {}",
        generated_at.to_rfc3339_opts(SecondsFormat::Micros, false)
    );
    let _ = writeln!(out, "- Input: `{}`", input_path.display());
    let _ = writeln!(out);
}

fn render_outcome(out: &mut String, counts: &OutcomeCounts) {
    let _ = writeln!(out, "## Outcome");
    let _ = writeln!(out, "- PASS: {}", counts.pass);
    let _ = writeln!(out, "- FAIL: {}", counts.fail);
    let _ = writeln!(out, "- BLOCKED: {}", counts.blocked);
    let _ = writeln!(out);
}

/// Emitted only when a root failure exists; the downstream line is emitted
/// only when at least one record was blocked.
fn render_root_cause(out: &mut String, summary: &Summary) {
    let Some(root) = &summary.root_failure else {
        return;
    };
    let _ = writeln!(out, "## Root cause");
    let _ = writeln!(out, "- Test {}: `{}`", root.test, root.code);
    let _ = writeln!(out, "- Detail: {}", root.detail);
    if !summary.blocked.is_empty() {
        let _ = writeln!(
            out,
            "- Downstream blocked: {} test(s)",
            summary.blocked.len()
        );
    }
    let _ = writeln!(out);
}

fn render_matrix(out: &mut String, records: &[ResultRecord]) {
    let _ = writeln!(out, "## Test matrix");
    for record in records {
        let _ = writeln!(
            out,
            "- Test {}: {} | {} | {}",
            record.test, record.result, record.code, record.detail
        );
    }
}
