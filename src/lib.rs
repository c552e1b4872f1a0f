extern crate self as symbex;

#[macro_use]
mod macros;
mod api;
mod attach;
mod config;
mod engine;
mod error;
mod host;
mod session;
mod symbols;

pub use api::{ExpandDetails, ExpandResult, ExpandResultVerbose, Options, expand, expand_verbose_with, expand_with};
pub use attach::{AttachStrategy, DeferredAttach, HostFeatures, ImmediateAttach, select_strategy};
pub use config::{
    FLAG_IMMEDIATE, FLAG_MARKUP, FLAG_ON_WHITESPACE, SymbolList, TableEntry, load_symbol_list_file, load_table_file,
    parse_table_json, table_to_json,
};
pub use engine::{
    CheckRequest, KeyShape, KeystrokeGate, LineEditReplacement, LineEditTrigger, MatchMetrics, ReplaceOutcome,
    SPECIAL_KEYS, SharedTable, Shadowed, TriggerTable, check_line_edit, classify_key, find_match,
    find_match_with_metrics, replace,
};
pub use error::{Error, FormatIssue, Result};
pub use host::{
    EditSurface, FieldId, Insertion, KeyCode, KeyEvent, Modifiers, SelectionSource, TextField, TextHost,
    render_markup,
};
pub use session::{Expansion, Session, SessionOptions, SessionStats};
pub use symbols::{Category, categories, default_list, default_table};

use serde::{Deserialize, Serialize};

// --- Core types -------------------------------------------------------------

/// When a rule is allowed to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerPolicy {
    /// Fires only on a whitespace/enter keystroke, and only when the key is
    /// preceded by whitespace or sits at the start of the text.
    OnWhitespaceBoundary,
    /// Fires on every qualifying keystroke as soon as the key is typed.
    Immediate,
}

/// A single trigger rule: `key` typed before the cursor is replaced by `value`.
///
/// The key is guaranteed non-empty; construct rules through [`TriggerRule::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerRule {
    key: String,
    value: String,
    is_markup: bool,
    policy: TriggerPolicy,
    /// Length of `key` in chars, cached for the hot path.
    key_len: usize,
}

impl TriggerRule {
    /// Create a plain-text rule. Fails with [`Error::EmptyKey`] for an empty key.
    pub fn new(key: impl Into<String>, value: impl Into<String>, policy: TriggerPolicy) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        let key_len = key.chars().count();
        Ok(TriggerRule { key, value: value.into(), is_markup: false, policy, key_len })
    }

    /// Mark the value as markup (parsed by the host instead of inserted literally).
    pub fn with_markup(mut self, is_markup: bool) -> Self {
        self.is_markup = is_markup;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_markup(&self) -> bool {
        self.is_markup
    }

    pub fn policy(&self) -> TriggerPolicy {
        self.policy
    }

    /// Key length in chars.
    pub fn key_len(&self) -> usize {
        self.key_len
    }
}

/// Text of the node holding a collapsed cursor, and the cursor offset into it.
///
/// `cursor` counts chars (Unicode scalar values), not bytes. A context is only
/// ever built for a collapsed selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditingContext<'a> {
    pub text: &'a str,
    pub cursor: usize,
}

impl<'a> EditingContext<'a> {
    pub fn new(text: &'a str, cursor: usize) -> Self {
        EditingContext { text, cursor }
    }

    /// The text before the cursor, or `None` when the cursor lies past the end.
    pub fn before_cursor(&self) -> Option<&'a str> {
        let end = byte_offset(self.text, self.cursor)?;
        Some(&self.text[..end])
    }
}

/// Outcome of a match pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'t> {
    NoMatch,
    /// `matched_len` is always `rule.key_len()`, echoed so the caller does not
    /// re-derive the range to replace.
    Matched { rule: &'t TriggerRule, matched_len: usize },
}

impl<'t> MatchResult<'t> {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }

    pub fn rule(&self) -> Option<&'t TriggerRule> {
        match self {
            MatchResult::Matched { rule, .. } => Some(rule),
            MatchResult::NoMatch => None,
        }
    }
}

/// Byte offset of the `chars`-th char in `text`; `text.len()` for one past the
/// last char and `None` beyond that.
pub(crate) fn byte_offset(text: &str, chars: usize) -> Option<usize> {
    if chars == 0 {
        return Some(0);
    }
    match text.char_indices().nth(chars) {
        Some((idx, _)) => Some(idx),
        None if text.chars().count() == chars => Some(text.len()),
        None => None,
    }
}
