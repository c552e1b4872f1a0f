//! Editing session.
//!
//! A [`Session`] is what a host wires its key events into. It owns:
//!
//! - a [`SharedTable`] handle (the configuration side may keep a clone and
//!   replace the table between keystrokes),
//! - one [`KeystrokeGate`] per attached field.
//!
//! ```text
//! host key event ──▶ Session::key_down / key_up
//!                      │ gate says "check now"
//!                      ▼
//!                    host.editing_context()   (None: skip silently)
//!                      │
//!                      ▼
//!                    find_match(snapshot, ctx)
//!                      │ Matched
//!                      ▼
//!                    replace(host, cursor - len .. cursor)
//! ```
//!
//! Everything runs synchronously inside the host's handler; the replacement
//! for one keystroke is complete before the call returns.

use crate::engine::{
    KeystrokeGate, MatchMetrics, ReplaceOutcome, SharedTable, TriggerTable, find_match_with_metrics, replace,
};
use crate::host::{FieldId, KeyEvent, Modifiers, TextHost};
use crate::MatchResult;
use std::collections::HashMap;
use std::ops::Range;

/// Knobs for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Modifiers that mark a key press as a command shortcut, which never
    /// triggers a check.
    pub command_modifiers: Modifiers,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions { command_modifiers: Modifiers::CONTROL | Modifiers::META }
    }
}

/// A replacement the session performed (or attempted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub field: FieldId,
    pub key: String,
    pub value: String,
    pub is_markup: bool,
    /// Char range the key occupied.
    pub range: Range<usize>,
    pub outcome: ReplaceOutcome,
}

/// Running totals over every check of a session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    /// Match passes run.
    pub checks: usize,
    /// Checks skipped because the selection was not collapsed or absent.
    pub skipped_selection: usize,
    pub matches: usize,
    /// Matches whose replacement range had gone stale.
    pub stale: usize,
    /// Per-pass counters, summed.
    pub totals: MatchMetrics,
}

#[derive(Debug)]
pub struct Session {
    table: SharedTable,
    gates: HashMap<FieldId, KeystrokeGate>,
    options: SessionOptions,
    stats: SessionStats,
}

impl Session {
    pub fn new(table: TriggerTable) -> Self {
        Session::with_shared(SharedTable::new(table), SessionOptions::default())
    }

    /// Build a session over an existing table handle.
    pub fn with_shared(table: SharedTable, options: SessionOptions) -> Self {
        let session = Session { table, gates: HashMap::new(), options, stats: SessionStats::default() };
        session.log_shadowed(&session.table.snapshot());
        session
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// The table handle; clone it to replace the table from elsewhere.
    pub fn table(&self) -> &SharedTable {
        &self.table
    }

    /// Install a new table wholesale. Checks already holding a snapshot keep
    /// the old one.
    pub fn set_table(&self, table: TriggerTable) {
        tracing::debug!(rules = table.len(), "installing trigger table");
        self.log_shadowed(&table);
        self.table.replace(table);
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Wire a gate to `field`. Returns `false` if it already had one.
    pub fn attach(&mut self, field: FieldId) -> bool {
        if self.gates.contains_key(&field) {
            tracing::trace!(field = field.0, "field already attached");
            return false;
        }
        self.gates.insert(field, KeystrokeGate::new(self.options.command_modifiers));
        tracing::debug!(field = field.0, "attached field");
        true
    }

    /// Drop the gate of a field that went away. Returns whether it was attached.
    pub fn detach(&mut self, field: FieldId) -> bool {
        self.gates.remove(&field).is_some()
    }

    pub fn is_attached(&self, field: FieldId) -> bool {
        self.gates.contains_key(&field)
    }

    pub fn attached_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.gates.keys().copied()
    }

    /// Key-down on `field`. Space and enter are checked right away.
    pub fn key_down<H: TextHost + ?Sized>(
        &mut self,
        field: FieldId,
        event: &KeyEvent,
        host: &mut H,
    ) -> Option<Expansion> {
        let request = self.gates.get_mut(&field)?.key_down(event)?;
        self.check(field, host, request.committed_by_whitespace)
    }

    /// Key-up on `field`. Runs the check deferred by the matching key-down.
    pub fn key_up<H: TextHost + ?Sized>(
        &mut self,
        field: FieldId,
        event: &KeyEvent,
        host: &mut H,
    ) -> Option<Expansion> {
        let request = self.gates.get_mut(&field)?.key_up(event)?;
        self.check(field, host, request.committed_by_whitespace)
    }

    /// Run one match pass against the host's current selection and apply the
    /// winning rule, if any.
    pub fn check<H: TextHost + ?Sized>(
        &mut self,
        field: FieldId,
        host: &mut H,
        committed_by_whitespace: bool,
    ) -> Option<Expansion> {
        let snapshot = self.table.snapshot();

        let (rule, range) = {
            let Some(ctx) = host.editing_context() else {
                tracing::trace!(field = field.0, "no collapsed selection; skipping check");
                self.stats.skipped_selection += 1;
                return None;
            };

            let (result, metrics) = find_match_with_metrics(&snapshot, &ctx, committed_by_whitespace);
            self.stats.checks += 1;
            self.stats.totals.accumulate(&metrics);

            match result {
                MatchResult::NoMatch => return None,
                MatchResult::Matched { rule, matched_len } => (rule, ctx.cursor - matched_len..ctx.cursor),
            }
        };

        self.stats.matches += 1;
        let outcome = replace(host, range.clone(), rule.value(), rule.is_markup());
        if outcome == ReplaceOutcome::Stale {
            self.stats.stale += 1;
        }
        tracing::debug!(field = field.0, key = rule.key(), start = range.start, end = range.end, ?outcome, "expansion");

        Some(Expansion {
            field,
            key: rule.key().to_string(),
            value: rule.value().to_string(),
            is_markup: rule.is_markup(),
            range,
            outcome,
        })
    }

    fn log_shadowed(&self, table: &TriggerTable) {
        for dead in table.shadowed() {
            tracing::warn!(
                key = dead.key.as_str(),
                index = dead.index,
                shadowed_by = dead.shadowed_by,
                "duplicate trigger key can never fire"
            );
        }
    }
}
