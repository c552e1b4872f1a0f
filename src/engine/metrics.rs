//! Match pass metrics.
//!
//! `find_match` is the hot path and returns only the result.
//! `find_match_with_metrics` also reports how far the pass got through the
//! table and why rules were skipped; the CLI's verbose report and the session
//! totals are built from these.

use std::time::Duration;

/// Counters for a single match pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchMetrics {
    /// Elapsed time for the pass.
    pub elapsed: Duration,
    /// Rules looked at before the pass ended (the winner included).
    pub rules_considered: usize,
    /// Boundary rules skipped because no whitespace committed the keystroke.
    pub skipped_policy: usize,
    /// Rules whose key is longer than the text before the cursor.
    pub skipped_room: usize,
    /// Rules whose key does not end at the cursor.
    pub skipped_mismatch: usize,
    /// Boundary rules whose key is glued to a preceding word.
    pub skipped_boundary: usize,
    /// Table index of the winning rule.
    pub matched_index: Option<usize>,
}

impl MatchMetrics {
    /// Fold another pass into running totals.
    pub fn accumulate(&mut self, other: &MatchMetrics) {
        self.elapsed += other.elapsed;
        self.rules_considered += other.rules_considered;
        self.skipped_policy += other.skipped_policy;
        self.skipped_room += other.skipped_room;
        self.skipped_mismatch += other.skipped_mismatch;
        self.skipped_boundary += other.skipped_boundary;
    }
}
