//! The trigger table.
//!
//! This module holds the *static* side of the engine: the ordered rule list a
//! match pass walks, and the handle that lets configuration swap it.
//!
//! Matching is split in two phases:
//!
//! 1. **Build the table** (this module): rules arrive already ordered from
//!    configuration. Order is precedence, so nothing here sorts or rewrites.
//! 2. **Run** (see `matcher.rs`): a pass borrows one table snapshot and returns
//!    the first rule that matches.
//!
//! ## Invariants
//!
//! - Rule order is the configuration order. The first matching rule wins,
//!   which lets authors put long keys ahead of short overlapping ones.
//! - Duplicate keys are legal. The earlier rule wins and the later one is
//!   reported by [`TriggerTable::shadowed`].
//! - A table is never mutated in place. [`SharedTable::replace`] swaps in a
//!   whole new `Arc<TriggerTable>`, so a pass holding a snapshot sees either
//!   the old table or the new one, never a mix.

use super::dedup::{Shadowed, shadowed_rules};
use crate::TriggerRule;
use std::sync::{Arc, PoisonError, RwLock};

/// Ordered, immutable collection of trigger rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerTable {
    rules: Vec<TriggerRule>,
}

impl TriggerTable {
    pub fn new(rules: Vec<TriggerRule>) -> Self {
        TriggerTable { rules }
    }

    pub fn empty() -> Self {
        TriggerTable::default()
    }

    pub fn rules(&self) -> &[TriggerRule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TriggerRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules that can never fire because an earlier rule has the same key.
    pub fn shadowed(&self) -> Vec<Shadowed> {
        shadowed_rules(&self.rules)
    }
}

impl FromIterator<TriggerRule> for TriggerTable {
    fn from_iter<I: IntoIterator<Item = TriggerRule>>(iter: I) -> Self {
        TriggerTable { rules: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a TriggerTable {
    type Item = &'a TriggerRule;
    type IntoIter = std::slice::Iter<'a, TriggerRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Shared handle to the current table.
///
/// Clones share the same slot: the configuration side keeps one clone to call
/// [`replace`](SharedTable::replace), the session keeps another to take
/// snapshots.
#[derive(Debug, Clone, Default)]
pub struct SharedTable {
    current: Arc<RwLock<Arc<TriggerTable>>>,
}

impl SharedTable {
    pub fn new(table: TriggerTable) -> Self {
        SharedTable { current: Arc::new(RwLock::new(Arc::new(table))) }
    }

    /// The table as of now. Later replacements do not affect the snapshot.
    pub fn snapshot(&self) -> Arc<TriggerTable> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Install `table` wholesale and return the previous one.
    pub fn replace(&self, table: TriggerTable) -> Arc<TriggerTable> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(table))
    }
}
