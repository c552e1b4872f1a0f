//! First-match search.
//!
//! Given the text before a collapsed cursor, walk the table in order and
//! return the first rule whose key ends exactly at the cursor and whose policy
//! allows it to fire:
//!
//! ```text
//! text:   "see 1/2"        cursor = 7, committed by whitespace
//! rule:   "1/2"            start = 7 - 3 = 4
//!              ^^^         text[4..7] == "1/2"
//!             ^            text[3] == ' '  -> boundary ok -> match
//! ```
//!
//! Precedence is authored through table order; there is no longest-match or
//! scoring step. The search is pure: it reads the table and the context and
//! touches nothing else.

use super::metrics::MatchMetrics;
use super::table::TriggerTable;
use super::trigger::is_boundary_char;
use crate::{EditingContext, MatchResult, TriggerPolicy, TriggerRule};
use std::time::Instant;

/// Why a rule did not fire at the cursor.
enum Skip {
    Policy,
    Room,
    Mismatch,
    Boundary,
}

/// Find the rule to apply at `ctx.cursor`.
///
/// `committed_by_whitespace` is true when the keystroke being handled was a
/// space or enter; boundary rules are only considered then.
pub fn find_match<'t>(
    table: &'t TriggerTable,
    ctx: &EditingContext<'_>,
    committed_by_whitespace: bool,
) -> MatchResult<'t> {
    search(table, ctx, committed_by_whitespace, &mut MatchMetrics::default())
}

/// [`find_match`] plus counters describing the pass.
pub fn find_match_with_metrics<'t>(
    table: &'t TriggerTable,
    ctx: &EditingContext<'_>,
    committed_by_whitespace: bool,
) -> (MatchResult<'t>, MatchMetrics) {
    let start = Instant::now();
    let mut metrics = MatchMetrics::default();
    let result = search(table, ctx, committed_by_whitespace, &mut metrics);
    metrics.elapsed = start.elapsed();
    (result, metrics)
}

fn search<'t>(
    table: &'t TriggerTable,
    ctx: &EditingContext<'_>,
    committed_by_whitespace: bool,
    metrics: &mut MatchMetrics,
) -> MatchResult<'t> {
    // A cursor past the end of the text leaves nothing to compare against.
    let Some(before) = ctx.before_cursor() else {
        return MatchResult::NoMatch;
    };

    for (idx, rule) in table.iter().enumerate() {
        metrics.rules_considered += 1;
        match check_rule(rule, before, ctx.cursor, committed_by_whitespace) {
            Ok(()) => {
                metrics.matched_index = Some(idx);
                tracing::trace!(key = rule.key(), index = idx, cursor = ctx.cursor, "rule matched");
                return MatchResult::Matched { rule, matched_len: rule.key_len() };
            }
            Err(Skip::Policy) => metrics.skipped_policy += 1,
            Err(Skip::Room) => metrics.skipped_room += 1,
            Err(Skip::Mismatch) => metrics.skipped_mismatch += 1,
            Err(Skip::Boundary) => metrics.skipped_boundary += 1,
        }
    }

    MatchResult::NoMatch
}

fn check_rule(rule: &TriggerRule, before: &str, cursor: usize, committed_by_whitespace: bool) -> Result<(), Skip> {
    let boundary_rule = rule.policy() == TriggerPolicy::OnWhitespaceBoundary;

    if boundary_rule && !committed_by_whitespace {
        return Err(Skip::Policy);
    }
    if rule.key_len() > cursor {
        return Err(Skip::Room);
    }
    if !before.ends_with(rule.key()) {
        return Err(Skip::Mismatch);
    }
    if boundary_rule {
        let prefix = &before[..before.len() - rule.key().len()];
        if let Some(prev) = prefix.chars().next_back() {
            if !is_boundary_char(prev) {
                return Err(Skip::Boundary);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rules: Vec<TriggerRule>) -> TriggerTable {
        TriggerTable::new(rules)
    }

    fn matched_value<'t>(result: MatchResult<'t>) -> Option<&'t str> {
        result.rule().map(|r| r.value())
    }

    #[test]
    fn immediate_rule_matches_at_cursor() {
        let t = table(vec![trigger!(":)" => "😀", immediate).unwrap()]);
        let ctx = EditingContext::new("hello :) ", 8);

        let result = find_match(&t, &ctx, false);

        match result {
            MatchResult::Matched { rule, matched_len } => {
                assert_eq!(rule.value(), "😀");
                assert_eq!(matched_len, 2);
            }
            MatchResult::NoMatch => panic!("expected a match"),
        }
    }

    #[test]
    fn boundary_rule_needs_whitespace_commit() {
        let t = table(vec![trigger!("1/2" => "½").unwrap()]);
        let ctx = EditingContext::new("see 1/2", 7);

        assert_eq!(find_match(&t, &ctx, false), MatchResult::NoMatch);
        assert_eq!(matched_value(find_match(&t, &ctx, true)), Some("½"));
    }

    #[test]
    fn boundary_rule_rejects_mid_word_key() {
        let t = table(vec![trigger!("1/2" => "½").unwrap()]);
        let ctx = EditingContext::new("x1/2", 4);
        assert_eq!(find_match(&t, &ctx, true), MatchResult::NoMatch);
    }

    #[test]
    fn boundary_rule_matches_at_start_of_text() {
        let t = table(vec![trigger!("--" => "‒").unwrap()]);
        let ctx = EditingContext::new("--", 2);
        assert_eq!(matched_value(find_match(&t, &ctx, true)), Some("‒"));
    }

    #[test]
    fn boundary_rule_accepts_no_break_space() {
        let t = table(vec![trigger!("--" => "‒").unwrap()]);
        let ctx = EditingContext::new("a\u{a0}--", 4);
        assert_eq!(matched_value(find_match(&t, &ctx, true)), Some("‒"));
    }

    #[test]
    fn first_match_wins_over_longer_key() {
        let t = table(vec![
            trigger!("->" => "→", immediate).unwrap(),
            trigger!("-->" => "⟶", immediate).unwrap(),
        ]);
        let ctx = EditingContext::new("a -->", 5);
        assert_eq!(matched_value(find_match(&t, &ctx, false)), Some("→"));
    }

    #[test]
    fn earlier_duplicate_wins() {
        let t = table(vec![
            trigger!(":x:" => "first", immediate).unwrap(),
            trigger!(":x:" => "second", immediate).unwrap(),
        ]);
        let ctx = EditingContext::new(":x:", 3);
        assert_eq!(matched_value(find_match(&t, &ctx, false)), Some("first"));
    }

    #[test]
    fn key_longer_than_prefix_never_matches() {
        let t = table(vec![trigger!(":alpha:" => "α", immediate).unwrap()]);
        let ctx = EditingContext::new("pha:", 4);
        assert_eq!(find_match(&t, &ctx, true), MatchResult::NoMatch);
    }

    #[test]
    fn cursor_past_end_is_no_match() {
        let t = table(vec![trigger!("a" => "b", immediate).unwrap()]);
        let ctx = EditingContext::new("a", 5);
        assert_eq!(find_match(&t, &ctx, true), MatchResult::NoMatch);
    }

    #[test]
    fn only_text_before_cursor_is_considered() {
        let t = table(vec![trigger!(":pi:" => "π", immediate).unwrap()]);
        let ctx = EditingContext::new(":pi: tail", 4);
        assert_eq!(matched_value(find_match(&t, &ctx, false)), Some("π"));
        let ctx = EditingContext::new(":pi: tail", 9);
        assert_eq!(find_match(&t, &ctx, false), MatchResult::NoMatch);
    }

    #[test]
    fn metrics_count_skips() {
        let t = table(vec![
            trigger!("--" => "‒").unwrap(),
            trigger!(":omega:" => "ω", immediate).unwrap(),
            trigger!(":nu:" => "ν", immediate).unwrap(),
            trigger!(":mu:" => "μ", immediate).unwrap(),
        ]);
        let ctx = EditingContext::new("x :mu:", 6);

        let (result, metrics) = find_match_with_metrics(&t, &ctx, false);

        assert_eq!(matched_value(result), Some("μ"));
        assert_eq!(metrics.rules_considered, 4);
        assert_eq!(metrics.skipped_policy, 1);
        assert_eq!(metrics.skipped_room, 1);
        assert_eq!(metrics.skipped_mismatch, 1);
        assert_eq!(metrics.matched_index, Some(3));
    }
}
