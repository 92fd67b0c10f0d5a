//! Aggregation over a result set: outcome tallies, the root failure, and
//! the blocked list. One pass, input order preserved.

use crate::record::{Outcome, ResultRecord};

/// Zero-seeded counters, one per [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutcomeCounts {
    /// Records classified [`Outcome::Pass`].
    pub pass: usize,
    /// Records classified [`Outcome::Fail`].
    pub fail: usize,
    /// Records classified [`Outcome::Blocked`].
    pub blocked: usize,
    /// Records classified [`Outcome::Unknown`].
    pub unknown: usize,
}

impl OutcomeCounts {
    /// Increments the counter for one classified record.
    pub fn tally(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Pass => self.pass += 1,
            Outcome::Fail => self.fail += 1,
            Outcome::Blocked => self.blocked += 1,
            Outcome::Unknown => self.unknown += 1,
        }
    }

    /// Sum of all four counters; always equals the record count.
    #[must_use]
    pub fn total(&self) -> usize {
        self.pass + self.fail + self.blocked + self.unknown
    }
}

/// Derived view of one result set. Built once per run by [`summarize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    /// Outcome tallies over the whole set.
    pub counts: OutcomeCounts,
    /// First record (input order) classified [`Outcome::Fail`], if any.
    /// Later failures are never reported individually.
    pub root_failure: Option<ResultRecord>,
    /// Every record classified [`Outcome::Blocked`], input order preserved.
    pub blocked: Vec<ResultRecord>,
}

/// Aggregates a result set in a single pass.
#[must_use]
pub fn summarize(records: &[ResultRecord]) -> Summary {
    let mut summary = Summary::default();
    for record in records {
        let outcome = record.outcome();
        summary.counts.tally(outcome);
        match outcome {
            Outcome::Fail if summary.root_failure.is_none() => {
                summary.root_failure = Some(record.clone());
            }
            Outcome::Blocked => summary.blocked.push(record.clone()),
            _ => {}
        }
    }
    summary
}
