//! Configuration feed.
//!
//! Two input shapes are accepted:
//!
//! - A **table feed**: the ordered rule list, one object per rule.
//!
//!   ```json
//!   [{"key": ":alpha:", "val": "α", "f": 1},
//!    {"key": "1/2",     "val": "½", "f": 0},
//!    {"key": "::hr::",  "val": "<hr>", "f": 2}]
//!   ```
//!
//!   `f` is `0` (whitespace boundary), `1` (immediate) or `2` (immediate,
//!   markup value). Order is kept as given.
//!
//! - A **symbol list**: bare `[key, value]` pairs. Each key's flag is derived
//!   from its shape (see `engine/trigger.rs`) and the list is ordered longest
//!   key first so long keys beat the short keys they contain.
//!
//! Malformed input is reported here, at load time, as an [`Error`]. Matching
//! assumes whatever reaches it is well formed.

use crate::engine::{TriggerTable, classify_key, first_occurrences};
use crate::error::{Error, FormatIssue, Result};
use crate::{TriggerPolicy, TriggerRule};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const FLAG_ON_WHITESPACE: u8 = 0;
pub const FLAG_IMMEDIATE: u8 = 1;
pub const FLAG_MARKUP: u8 = 2;

/// One rule of the table feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    pub key: String,
    pub val: String,
    #[serde(rename = "f")]
    pub flag: u8,
}

impl TableEntry {
    pub fn new(key: impl Into<String>, val: impl Into<String>, flag: u8) -> Self {
        TableEntry { key: key.into(), val: val.into(), flag }
    }

    /// The feed entry describing `rule`. Markup is only expressible on
    /// immediate rules; `index` is only used for error reporting.
    pub fn from_rule(index: usize, rule: &TriggerRule) -> Result<Self> {
        let flag = match (rule.policy(), rule.is_markup()) {
            (TriggerPolicy::Immediate, true) => FLAG_MARKUP,
            (TriggerPolicy::Immediate, false) => FLAG_IMMEDIATE,
            (TriggerPolicy::OnWhitespaceBoundary, false) => FLAG_ON_WHITESPACE,
            (TriggerPolicy::OnWhitespaceBoundary, true) => {
                return Err(Error::Unrepresentable { index, key: rule.key().to_string() });
            }
        };
        Ok(TableEntry::new(rule.key(), rule.value(), flag))
    }

    /// Convert into a rule. `index` is only used for error reporting.
    pub fn into_rule(self, index: usize) -> Result<TriggerRule> {
        let (policy, markup) = match self.flag {
            FLAG_ON_WHITESPACE => (TriggerPolicy::OnWhitespaceBoundary, false),
            FLAG_IMMEDIATE => (TriggerPolicy::Immediate, false),
            FLAG_MARKUP => (TriggerPolicy::Immediate, true),
            flag => return Err(Error::UnknownFlag { index, flag }),
        };
        TriggerRule::new(self.key, self.val, policy)
            .map(|rule| rule.with_markup(markup))
            .map_err(|err| Error::InvalidEntry { index, source: Box::new(err) })
    }
}

/// Build a table from feed entries, keeping their order.
pub fn table_from_entries(entries: impl IntoIterator<Item = TableEntry>) -> Result<TriggerTable> {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| entry.into_rule(index))
        .collect::<Result<Vec<_>>>()
        .map(TriggerTable::new)
}

/// Parse a JSON table feed.
pub fn parse_table_json(json: &str) -> Result<TriggerTable> {
    let entries: Vec<TableEntry> = serde_json::from_str(json)?;
    table_from_entries(entries)
}

/// Serialize `table` back into the feed format. Fails on rules the feed
/// cannot express rather than writing one that reloads differently.
pub fn table_to_json(table: &TriggerTable) -> Result<String> {
    let entries = table
        .iter()
        .enumerate()
        .map(|(index, rule)| TableEntry::from_rule(index, rule))
        .collect::<Result<Vec<_>>>()?;
    Ok(serde_json::to_string_pretty(&entries)?)
}

/// Read a JSON table feed from `path`.
pub fn load_table_file(path: impl AsRef<Path>) -> Result<TriggerTable> {
    parse_table_json(&read_file(path.as_ref())?)
}

/// Read a JSON symbol list (`[[key, value], ...]`) from `path`.
pub fn load_symbol_list_file(path: impl AsRef<Path>) -> Result<SymbolList> {
    SymbolList::parse_json(&read_file(path.as_ref())?)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })
}

// --- Symbol lists ---------------------------------------------------------------

/// Plain `(key, value)` pairs, in authoring order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolList {
    pairs: Vec<(String, String)>,
}

impl SymbolList {
    pub fn new<K: Into<String>, V: Into<String>>(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        SymbolList { pairs: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    /// Parse `[[key, value], ...]`. Every row must hold exactly a non-empty key
    /// and a non-empty value; all bad rows are reported together.
    pub fn parse_json(json: &str) -> Result<Self> {
        let rows: Vec<Vec<String>> = serde_json::from_str(json)?;
        let issues = check_format(&rows);
        if !issues.is_empty() {
            return Err(Error::InvalidFormat { issues });
        }
        Ok(SymbolList {
            pairs: rows
                .into_iter()
                .filter_map(|row| {
                    let mut row = row.into_iter();
                    Some((row.next()?, row.next()?))
                })
                .collect(),
        })
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Keys that appear more than once, each reported once, in order of their
    /// first repeat.
    pub fn duplicate_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for (later, _) in first_occurrences(self.pairs.iter().map(|(k, _)| k.as_str())) {
            let key = &self.pairs[later].0;
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
        keys
    }

    /// Strict check used by authoring tools: no empty keys or values, no
    /// duplicate keys.
    pub fn validate(&self) -> Result<()> {
        let issues: Vec<FormatIssue> = self
            .pairs
            .iter()
            .enumerate()
            .filter(|(_, (k, v))| k.is_empty() || v.is_empty())
            .map(|(idx, (k, v))| FormatIssue { line: idx + 1, content: format!("{k} {v}") })
            .collect();
        if !issues.is_empty() {
            return Err(Error::InvalidFormat { issues });
        }
        let keys = self.duplicate_keys();
        if !keys.is_empty() {
            return Err(Error::KeyConflict { keys });
        }
        Ok(())
    }

    /// Feed entries with shape-derived flags, longest key first. Keys of equal
    /// length keep their authoring order.
    pub fn to_entries(&self) -> Vec<TableEntry> {
        let mut pairs: Vec<&(String, String)> = self.pairs.iter().collect();
        pairs.sort_by_key(|(k, _)| std::cmp::Reverse(k.chars().count()));
        pairs
            .into_iter()
            .map(|(key, val)| {
                let flag = match classify_key(key) {
                    (_, true) => FLAG_MARKUP,
                    (TriggerPolicy::Immediate, false) => FLAG_IMMEDIATE,
                    (TriggerPolicy::OnWhitespaceBoundary, false) => FLAG_ON_WHITESPACE,
                };
                TableEntry::new(key.as_str(), val.as_str(), flag)
            })
            .collect()
    }

    pub fn to_table(&self) -> Result<TriggerTable> {
        table_from_entries(self.to_entries())
    }
}

fn check_format(rows: &[Vec<String>]) -> Vec<FormatIssue> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| row.len() != 2 || row.iter().any(String::is_empty))
        .map(|(idx, row)| FormatIssue { line: idx + 1, content: row.join(" ") })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_table_feed_in_order() {
        let json = r#"[
            {"key": ":alpha:", "val": "α", "f": 1},
            {"key": "1/2", "val": "½", "f": 0},
            {"key": "::hr::", "val": "<hr>", "f": 2}
        ]"#;

        let table = parse_table_json(json).unwrap();

        let rules = table.rules();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].policy(), TriggerPolicy::Immediate);
        assert_eq!(rules[1].policy(), TriggerPolicy::OnWhitespaceBoundary);
        assert!(rules[2].is_markup());
        assert_eq!(rules[2].policy(), TriggerPolicy::Immediate);
    }

    #[test]
    fn rejects_unknown_flag() {
        let err = parse_table_json(r#"[{"key": "a", "val": "b", "f": 1}, {"key": "c", "val": "d", "f": 7}]"#)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownFlag { index: 1, flag: 7 }));
    }

    #[test]
    fn rejects_empty_key() {
        let err = parse_table_json(r#"[{"key": "", "val": "b", "f": 0}]"#).unwrap_err();
        match err {
            Error::InvalidEntry { index, source } => {
                assert_eq!(index, 0);
                assert!(matches!(*source, Error::EmptyKey));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse_table_json("[{\"key\": 1}"), Err(Error::Json(_))));
        assert!(matches!(parse_table_json(r#"[{"key": "a", "val": "b"}]"#), Err(Error::Json(_))));
    }

    #[test]
    fn duplicate_keys_are_kept_in_table_feed() {
        let table = parse_table_json(
            r#"[{"key": "->", "val": "→", "f": 1}, {"key": "->", "val": "⇒", "f": 1}]"#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.shadowed().len(), 1);
    }

    #[test]
    fn feed_round_trips_through_json() {
        let table = parse_table_json(r#"[{"key": "::b::", "val": "<b>b</b>", "f": 2}]"#).unwrap();
        let json = table_to_json(&table).unwrap();
        assert_eq!(parse_table_json(&json).unwrap(), table);
    }

    #[test]
    fn boundary_markup_rule_is_not_written() {
        let rule = TriggerRule::new("::b::", "<b>b</b>", TriggerPolicy::OnWhitespaceBoundary)
            .unwrap()
            .with_markup(true);
        let table = TriggerTable::new(vec![trigger!("->" => "→", immediate).unwrap(), rule]);

        match table_to_json(&table) {
            Err(Error::Unrepresentable { index, key }) => assert_eq!((index, key.as_str()), (1, "::b::")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn symbol_list_orders_longest_key_first() {
        let list = SymbolList::new([("--", "‒"), ("---", "—"), (":pi:", "π"), ("->", "→")]);

        let entries = list.to_entries();

        let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec![":pi:", "---", "--", "->"]);
        let flags: Vec<u8> = entries.iter().map(|e| e.flag).collect();
        assert_eq!(flags, vec![FLAG_IMMEDIATE, FLAG_ON_WHITESPACE, FLAG_ON_WHITESPACE, FLAG_IMMEDIATE]);
    }

    #[test]
    fn symbol_list_reports_bad_rows() {
        let err = SymbolList::parse_json(r#"[[":a:", "α"], [":b:"], ["", "x"], [":c:", "γ", "extra"]]"#).unwrap_err();
        match err {
            Error::InvalidFormat { issues } => {
                let lines: Vec<usize> = issues.iter().map(|i| i.line).collect();
                assert_eq!(lines, vec![2, 3, 4]);
                assert_eq!(issues[0].content, ":b:");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn strict_validation_rejects_duplicates() {
        let list = SymbolList::new([(":a:", "1"), (":b:", "2"), (":a:", "3"), (":a:", "4")]);
        assert_eq!(list.duplicate_keys(), vec![":a:".to_string()]);
        assert!(matches!(list.validate(), Err(Error::KeyConflict { keys }) if keys == vec![":a:".to_string()]));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_table_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
