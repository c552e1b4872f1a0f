//! Key classification.
//!
//! A plain symbol list only carries `(key, value)` pairs. When such a list is
//! turned into a trigger table, each key's policy and markup flag are derived
//! from its *shape*:
//!
//! - `::name::` wraps a markup value and fires immediately.
//! - `:name:` and the arrow keys in [`SPECIAL_KEYS`] fire immediately: they
//!   are unlikely to be typed by accident, so there is no need to wait for a
//!   word boundary.
//! - Everything else (`--`, `1/2`, ...) waits for a whitespace commit at a
//!   word boundary, so common short keys do not expand mid-word.
//!
//! The boundary test itself ([`is_boundary_char`]) is shared with the matcher.

use crate::TriggerPolicy;

/// Keys that behave like colon-delimited keys even though they are not.
pub const SPECIAL_KEYS: &[&str] = &["->", "<-", "=>", "<="];

bitflags::bitflags! {
    /// Shape features of a trigger key.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeyShape: u8 {
        const COLON_DELIMITED        = 1 << 0;
        const DOUBLE_COLON_DELIMITED = 1 << 1;
        const SPECIAL                = 1 << 2;
    }
}

impl KeyShape {
    /// Scan `key` for shape features.
    pub fn scan(key: &str) -> Self {
        let mut shape = KeyShape::empty();
        if key.starts_with(':') && key.ends_with(':') {
            shape |= KeyShape::COLON_DELIMITED;
        }
        if key.starts_with("::") && key.ends_with("::") {
            shape |= KeyShape::DOUBLE_COLON_DELIMITED;
        }
        if SPECIAL_KEYS.contains(&key) {
            shape |= KeyShape::SPECIAL;
        }
        shape
    }
}

/// Policy and markup flag implied by the shape of `key`.
pub fn classify_key(key: &str) -> (TriggerPolicy, bool) {
    let shape = KeyShape::scan(key);
    if shape.contains(KeyShape::DOUBLE_COLON_DELIMITED) {
        (TriggerPolicy::Immediate, true)
    } else if shape.intersects(KeyShape::COLON_DELIMITED | KeyShape::SPECIAL) {
        (TriggerPolicy::Immediate, false)
    } else {
        (TriggerPolicy::OnWhitespaceBoundary, false)
    }
}

/// Whether `c` separates words for boundary rules. Includes the no-break space
/// rich-text hosts insert for typed spaces.
pub fn is_boundary_char(c: char) -> bool {
    c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_shape() {
        assert_eq!(classify_key(":alpha:"), (TriggerPolicy::Immediate, false));
        assert_eq!(classify_key("::hr::"), (TriggerPolicy::Immediate, true));
        assert_eq!(classify_key("->"), (TriggerPolicy::Immediate, false));
        assert_eq!(classify_key("<="), (TriggerPolicy::Immediate, false));
        assert_eq!(classify_key("--"), (TriggerPolicy::OnWhitespaceBoundary, false));
        assert_eq!(classify_key("1/2"), (TriggerPolicy::OnWhitespaceBoundary, false));
        assert_eq!(classify_key(":half"), (TriggerPolicy::OnWhitespaceBoundary, false));
    }

    #[test]
    fn double_colon_is_also_colon_delimited() {
        let shape = KeyShape::scan("::x::");
        assert!(shape.contains(KeyShape::COLON_DELIMITED | KeyShape::DOUBLE_COLON_DELIMITED));
        assert!(!shape.contains(KeyShape::SPECIAL));
    }

    #[test]
    fn no_break_space_is_a_boundary() {
        assert!(is_boundary_char('\u{a0}'));
        assert!(is_boundary_char('\t'));
        assert!(!is_boundary_char('x'));
    }
}
