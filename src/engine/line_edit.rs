//! Matching for single-line boxes.
//!
//! A search box reports an edit *after* the typed char is already in the text
//! and has no key-down hook to check before whitespace lands. Boundary rules
//! therefore look one char back when the last typed char was whitespace:
//!
//! ```text
//! text:   "a 1/2 "   cursor = 6, Edited
//!              ^^^   end = cursor - 1, the trailing space stays
//! result: "a ½ "
//! ```
//!
//! Return works like a commit at the cursor itself. Immediate rules always end
//! at the cursor. A line box has no rich text, so markup values go in as the
//! text they render to.

use super::table::TriggerTable;
use super::trigger::is_boundary_char;
use crate::{TriggerPolicy, byte_offset, render_markup};

/// What the line box reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEditTrigger {
    /// The text changed because the user typed.
    Edited,
    /// Return was pressed; the text itself did not change.
    ReturnPressed,
}

/// A replacement to apply to the whole line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEditReplacement {
    /// Char offset where the key starts.
    pub start: usize,
    /// Char offset just past the key.
    pub end: usize,
    pub key: String,
    pub value: String,
    pub is_markup: bool,
}

impl LineEditReplacement {
    /// What actually lands in the line.
    pub fn inserted_text(&self) -> String {
        if self.is_markup { render_markup(&self.value) } else { self.value.clone() }
    }

    /// The line after replacement, and `cursor` moved so it keeps its place
    /// relative to the text after the key.
    pub fn apply(&self, text: &str, cursor: usize) -> Option<(String, usize)> {
        if cursor < self.end {
            return None;
        }
        let start = byte_offset(text, self.start)?;
        let end = byte_offset(text, self.end)?;
        let inserted = self.inserted_text();
        let mut out = String::with_capacity(text.len() + inserted.len());
        out.push_str(&text[..start]);
        out.push_str(&inserted);
        out.push_str(&text[end..]);
        Some((out, cursor - (self.end - self.start) + inserted.chars().count()))
    }
}

/// Check a line box after an edit. `cursor` is in chars.
pub fn check_line_edit(
    table: &TriggerTable,
    text: &str,
    cursor: usize,
    trigger: LineEditTrigger,
) -> Option<LineEditReplacement> {
    if text.is_empty() {
        return None;
    }
    let before = &text[..byte_offset(text, cursor)?];
    let whitespace_typed =
        trigger == LineEditTrigger::Edited && before.chars().next_back().is_some_and(is_boundary_char);

    for rule in table {
        let boundary_rule = rule.policy() == TriggerPolicy::OnWhitespaceBoundary;

        let (end, scope) = if !boundary_rule || trigger == LineEditTrigger::ReturnPressed {
            (cursor, before)
        } else if whitespace_typed {
            let trimmed = before.char_indices().next_back().map_or(before, |(idx, _)| &before[..idx]);
            (cursor - 1, trimmed)
        } else {
            continue;
        };

        if rule.key_len() > end || !scope.ends_with(rule.key()) {
            continue;
        }
        if boundary_rule {
            let prefix = &scope[..scope.len() - rule.key().len()];
            if prefix.chars().next_back().is_some_and(|c| !is_boundary_char(c)) {
                continue;
            }
        }

        tracing::trace!(key = rule.key(), end, "line edit matched");
        return Some(LineEditReplacement {
            start: end - rule.key_len(),
            end,
            key: rule.key().to_string(),
            value: rule.value().to_string(),
            is_markup: rule.is_markup(),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> TriggerTable {
        TriggerTable::new(vec![
            trigger!("1/2" => "½").unwrap(),
            trigger!(":pi:" => "π", immediate).unwrap(),
            trigger!("::b::" => "<b>bold</b>", markup).unwrap(),
        ])
    }

    #[test]
    fn boundary_rule_keeps_trailing_space() {
        let hit = check_line_edit(&table(), "a 1/2 ", 6, LineEditTrigger::Edited).unwrap();
        assert_eq!((hit.start, hit.end), (2, 5));
        assert_eq!(hit.apply("a 1/2 ", 6), Some(("a ½ ".to_string(), 4)));
    }

    #[test]
    fn boundary_rule_waits_for_whitespace() {
        assert!(check_line_edit(&table(), "a 1/2", 5, LineEditTrigger::Edited).is_none());
    }

    #[test]
    fn return_commits_at_cursor() {
        let hit = check_line_edit(&table(), "1/2", 3, LineEditTrigger::ReturnPressed).unwrap();
        assert_eq!(hit.apply("1/2", 3), Some(("½".to_string(), 1)));
    }

    #[test]
    fn boundary_rule_rejects_glued_key() {
        assert!(check_line_edit(&table(), "x1/2 ", 5, LineEditTrigger::Edited).is_none());
    }

    #[test]
    fn immediate_rule_fires_on_edit() {
        let hit = check_line_edit(&table(), "deck:pi: tag", 8, LineEditTrigger::Edited).unwrap();
        assert_eq!(hit.apply("deck:pi: tag", 8), Some(("deckπ tag".to_string(), 5)));
    }

    #[test]
    fn markup_value_is_inserted_as_rendered_text() {
        let hit = check_line_edit(&table(), "a ::b::", 7, LineEditTrigger::Edited).unwrap();
        assert!(hit.is_markup);
        assert_eq!(hit.apply("a ::b::", 7), Some(("a bold".to_string(), 6)));
    }

    #[test]
    fn cursor_before_key_end_is_rejected() {
        let hit = check_line_edit(&table(), "a 1/2 ", 6, LineEditTrigger::Edited).unwrap();
        assert_eq!(hit.apply("a 1/2 ", 4), None);
    }

    #[test]
    fn empty_text_never_matches() {
        assert!(check_line_edit(&table(), "", 0, LineEditTrigger::ReturnPressed).is_none());
    }
}
