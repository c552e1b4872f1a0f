//! Duplicate key detection.
//!
//! Duplicate keys are legal in a trigger table: matching walks rules in order,
//! so the first rule with a given key always wins and every later copy is dead.
//! This module only *reports* those dead rules so the configuration side can
//! log them. Nothing here removes or reorders rules.
//!
//! The same scan backs strict symbol-list validation in `config.rs`, where a
//! repeated key is rejected up front.

use crate::TriggerRule;
use std::collections::HashMap;

/// A rule that can never fire because an earlier rule has the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shadowed {
    /// Index of the dead rule.
    pub index: usize,
    /// Index of the earlier rule that wins.
    pub shadowed_by: usize,
    pub key: String,
}

/// For every key seen before, yield `(later_index, first_index)`.
pub(crate) fn first_occurrences<'a>(keys: impl IntoIterator<Item = &'a str>) -> Vec<(usize, usize)> {
    let mut first_seen: HashMap<&'a str, usize> = HashMap::new();
    let mut repeats = Vec::new();
    for (idx, key) in keys.into_iter().enumerate() {
        match first_seen.get(key) {
            Some(&first) => repeats.push((idx, first)),
            None => {
                first_seen.insert(key, idx);
            }
        }
    }
    repeats
}

pub(crate) fn shadowed_rules(rules: &[TriggerRule]) -> Vec<Shadowed> {
    first_occurrences(rules.iter().map(|r| r.key()))
        .into_iter()
        .map(|(index, shadowed_by)| Shadowed { index, shadowed_by, key: rules[index].key().to_string() })
        .collect()
}
