//! Host boundary.
//!
//! The engine never owns the text it edits. A host (an editor widget, a web
//! view bridge, a test double) implements two small traits:
//!
//! - [`SelectionSource`]: read the focused text node and the collapsed cursor.
//! - [`EditSurface`]: mutate that node, ideally with a one-shot range replace.
//!
//! Key events arrive as [`KeyEvent`]s carrying just what the gate needs: which
//! key class was pressed and which modifiers were held.
//!
//! [`TextField`] is an in-memory host used by the CLI and the tests.

use crate::{EditingContext, byte_offset};
use std::ops::Range;

bitflags::bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT   = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT     = 1 << 2;
        const META    = 1 << 3;
    }
}

/// The key of a key event, reduced to the classes the gate distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Space,
    Enter,
    Char(char),
    Other,
}

impl KeyCode {
    /// Space and enter commit a word; everything else does not.
    pub fn is_whitespace_class(self) -> bool {
        matches!(self, KeyCode::Space | KeyCode::Enter)
    }

    /// Map a typed char to its key code.
    pub fn from_char(c: char) -> Self {
        match c {
            ' ' => KeyCode::Space,
            '\n' | '\r' => KeyCode::Enter,
            c => KeyCode::Char(c),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: KeyCode) -> Self {
        KeyEvent { key, modifiers: Modifiers::empty() }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn from_char(c: char) -> Self {
        KeyEvent::new(KeyCode::from_char(c))
    }
}

/// Identifier of an editable field, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u64);

/// Content to insert: literal text, or markup the host parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion<'a> {
    Text(&'a str),
    Markup(&'a str),
}

/// Read access to the current selection.
pub trait SelectionSource {
    /// Text of the focused node and the cursor offset, or `None` when there is
    /// no focus node or the selection is not collapsed.
    fn editing_context(&self) -> Option<EditingContext<'_>>;
}

/// Write access to the focused text node. Offsets are in chars.
///
/// `insert` must leave the cursor collapsed right after the inserted content.
pub trait EditSurface {
    /// Length of the node's text in chars.
    fn char_len(&self) -> usize;

    /// Replace `range` in one undo step and collapse the cursor after the
    /// inserted content. Hosts without such a primitive keep the default,
    /// which reports `false` so the caller falls back to delete + insert.
    fn replace_range(&mut self, range: Range<usize>, insertion: Insertion<'_>) -> bool {
        let _ = (range, insertion);
        false
    }

    fn set_cursor(&mut self, offset: usize);

    /// Delete the char before the cursor.
    fn delete_backward(&mut self);

    fn insert(&mut self, insertion: Insertion<'_>);
}

/// Everything the session needs from a host.
pub trait TextHost: SelectionSource + EditSurface {}

impl<T: SelectionSource + EditSurface + ?Sized> TextHost for T {}

/// Text content a markup value produces once parsed: tags dropped, common
/// entities decoded, `<br>` turned into a newline.
pub fn render_markup(markup: &str) -> String {
    let with_breaks = regex!(r"(?i)<br\s*/?>").replace_all(markup, "\n");
    let stripped = regex!(r"<[^>]*>").replace_all(&with_breaks, "");
    regex!(r"&(amp|lt|gt|quot|#39|nbsp);")
        .replace_all(&stripped, |caps: &regex::Captures<'_>| match &caps[1] {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" => "\"",
            "#39" => "'",
            _ => "\u{a0}",
        })
        .into_owned()
}

// --- In-memory host -----------------------------------------------------------

/// A single-node editable field kept in memory.
///
/// Mirrors what a rich-text host does with the engine's calls: typed chars
/// replace the selection, markup is parsed down to its text content, and each
/// mutating call counts as one undo-visible step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    text: String,
    /// Focus end of the selection, in chars.
    cursor: usize,
    /// Anchor of a non-collapsed selection.
    anchor: Option<usize>,
    focused: bool,
    range_replace: bool,
    undo_steps: usize,
}

impl Default for TextField {
    fn default() -> Self {
        TextField::new()
    }
}

impl TextField {
    pub fn new() -> Self {
        TextField { text: String::new(), cursor: 0, anchor: None, focused: true, range_replace: true, undo_steps: 0 }
    }

    /// A field holding `text` with the cursor clamped to `cursor`.
    pub fn with_text(text: impl Into<String>, cursor: usize) -> Self {
        let text = text.into();
        let cursor = cursor.min(text.chars().count());
        TextField { text, cursor, ..TextField::new() }
    }

    /// Behave like a host without a one-shot range replace primitive.
    pub fn without_range_replace(mut self) -> Self {
        self.range_replace = false;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor.is_none()
    }

    /// Number of undo-visible edits applied so far.
    pub fn undo_steps(&self) -> usize {
        self.undo_steps
    }

    /// Select `anchor..focus` (either order). Equal offsets collapse.
    pub fn select(&mut self, anchor: usize, focus: usize) {
        let len = self.char_len();
        self.cursor = focus.min(len);
        let anchor = anchor.min(len);
        self.anchor = (anchor != self.cursor).then_some(anchor);
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Replace the whole content, as a host does when a field is reloaded.
    pub fn set_text(&mut self, text: impl Into<String>, cursor: usize) {
        self.text = text.into();
        self.cursor = cursor.min(self.char_len());
        self.anchor = None;
    }

    /// Apply a typed char the way the host does after key-down: replace the
    /// selection (if any) and insert the char at the cursor.
    pub fn type_char(&mut self, c: char) {
        if let Some(anchor) = self.anchor.take() {
            let (start, end) = if anchor < self.cursor { (anchor, self.cursor) } else { (self.cursor, anchor) };
            self.splice(start..end, "");
            self.cursor = start;
        }
        let mut buf = [0u8; 4];
        let at = self.cursor;
        self.splice(at..at, c.encode_utf8(&mut buf));
        self.cursor = at + 1;
        self.undo_steps += 1;
    }

    fn splice(&mut self, range: Range<usize>, with: &str) {
        let start = byte_offset(&self.text, range.start).unwrap_or(self.text.len());
        let end = byte_offset(&self.text, range.end).unwrap_or(self.text.len());
        self.text.replace_range(start..end, with);
    }

    fn inserted_text(insertion: Insertion<'_>) -> String {
        match insertion {
            Insertion::Text(text) => text.to_string(),
            Insertion::Markup(markup) => render_markup(markup),
        }
    }
}

impl SelectionSource for TextField {
    fn editing_context(&self) -> Option<EditingContext<'_>> {
        if !self.focused || self.anchor.is_some() {
            return None;
        }
        Some(EditingContext::new(&self.text, self.cursor))
    }
}

impl EditSurface for TextField {
    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn replace_range(&mut self, range: Range<usize>, insertion: Insertion<'_>) -> bool {
        if !self.range_replace {
            return false;
        }
        let inserted = Self::inserted_text(insertion);
        let start = range.start;
        self.splice(range, &inserted);
        self.cursor = start + inserted.chars().count();
        self.anchor = None;
        self.undo_steps += 1;
        true
    }

    fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.char_len());
        self.anchor = None;
    }

    fn delete_backward(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.cursor;
        self.splice(at - 1..at, "");
        self.cursor = at - 1;
        self.undo_steps += 1;
    }

    fn insert(&mut self, insertion: Insertion<'_>) {
        let inserted = Self::inserted_text(insertion);
        let at = self.cursor;
        self.splice(at..at, &inserted);
        self.cursor = at + inserted.chars().count();
        self.undo_steps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_renders_to_text_content() {
        assert_eq!(render_markup("<b>x</b>&nbsp;&lt;y&gt;"), "x\u{a0}<y>");
        assert_eq!(render_markup("a<br/>b"), "a\nb");
        assert_eq!(render_markup("plain"), "plain");
    }

    #[test]
    fn typing_replaces_selection() {
        let mut field = TextField::with_text("hello", 5);
        field.select(0, 5);
        assert!(field.editing_context().is_none());
        field.type_char('J');
        assert_eq!(field.text(), "J");
        assert_eq!(field.cursor(), 1);
        assert!(field.is_collapsed());
    }

    #[test]
    fn unfocused_field_has_no_context() {
        let mut field = TextField::with_text("abc", 3);
        field.set_focused(false);
        assert!(field.editing_context().is_none());
    }

    #[test]
    fn range_replace_counts_one_step() {
        let mut field = TextField::with_text("a :pi: b", 6);
        assert!(field.replace_range(2..6, Insertion::Text("π")));
        assert_eq!(field.text(), "a π b");
        assert_eq!(field.cursor(), 3);
        assert_eq!(field.undo_steps(), 1);
    }

    #[test]
    fn key_codes_classify_whitespace() {
        assert!(KeyCode::from_char(' ').is_whitespace_class());
        assert!(KeyCode::from_char('\n').is_whitespace_class());
        assert!(!KeyCode::from_char('a').is_whitespace_class());
        assert!(!KeyCode::Other.is_whitespace_class());
    }
}
