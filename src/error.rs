//! Crate error type.
//!
//! Errors only ever surface at configuration load time. The keystroke path
//! (gate, matcher, executor) never returns one: every failure there degrades
//! to "this keystroke produced no replacement".

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// A malformed line of a symbol list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatIssue {
    /// 1-based line (entry) number.
    pub line: usize,
    /// The offending entry, space-joined.
    pub content: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("trigger key must not be empty")]
    EmptyKey,

    #[error("entry {index} has unknown flag {flag} (expected 0, 1 or 2)")]
    UnknownFlag { index: usize, flag: u8 },

    #[error("rule {index} ({key}) is a whitespace-boundary markup rule, which the table feed cannot express")]
    Unrepresentable { index: usize, key: String },

    #[error("invalid entry {index}: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("invalid symbol list format on {} line(s)", .issues.len())]
    InvalidFormat { issues: Vec<FormatIssue> },

    #[error("duplicate keys in symbol list: {}", .keys.join(", "))]
    KeyConflict { keys: Vec<String> },

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
