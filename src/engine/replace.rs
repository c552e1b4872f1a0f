//! In-place replacement.
//!
//! Once a rule matched, the key sitting before the cursor is swapped for the
//! rule's value on the host's edit surface:
//!
//! ```text
//! before: "hello :)|"          range = 6..8
//! after:  "hello 😀|"          cursor collapsed after the value
//! ```
//!
//! Hosts that offer a one-shot range replace get a single undo step. The
//! fallback (cursor to range end, one backward delete per char, one insert)
//! leaves `len + 1` undo steps and is only used when the host reports it has
//! no such primitive.
//!
//! A range that no longer fits the node (the host changed the text between
//! read and write) is a no-op.

use crate::host::{EditSurface, Insertion};
use std::ops::Range;

/// What happened to a replacement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceOutcome {
    /// Applied. `single_step` is false when the delete + insert fallback ran.
    Replaced { single_step: bool },
    /// The range did not fit the current text; nothing was touched.
    Stale,
}

impl ReplaceOutcome {
    pub fn is_replaced(self) -> bool {
        matches!(self, ReplaceOutcome::Replaced { .. })
    }
}

/// Replace `range` (char offsets) on `surface` with `value`.
pub fn replace<S: EditSurface + ?Sized>(
    surface: &mut S,
    range: Range<usize>,
    value: &str,
    is_markup: bool,
) -> ReplaceOutcome {
    let len = surface.char_len();
    if range.start > range.end || range.end > len {
        tracing::warn!(start = range.start, end = range.end, len, "stale replacement range; skipping");
        return ReplaceOutcome::Stale;
    }

    let insertion = if is_markup { Insertion::Markup(value) } else { Insertion::Text(value) };

    if surface.replace_range(range.clone(), insertion) {
        tracing::debug!(start = range.start, end = range.end, "replaced range");
        return ReplaceOutcome::Replaced { single_step: true };
    }

    surface.set_cursor(range.end);
    for _ in range.clone() {
        surface.delete_backward();
    }
    surface.insert(insertion);
    tracing::debug!(start = range.start, end = range.end, "replaced range via delete + insert");
    ReplaceOutcome::Replaced { single_step: false }
}
