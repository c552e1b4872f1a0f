//! Keystroke gate.
//!
//! Decides, per keystroke, *when* to run a match pass. Hosts update the
//! field's text for a typed char only after key-down, so most keys are checked
//! on key-up. Space and enter are checked on key-down, before the whitespace
//! itself lands: that keeps expansion responsive while a key auto-repeats
//! (key-down repeats, key-up fires once) and is exactly the moment a boundary
//! rule wants, with the key still ending at the cursor.
//!
//! ```text
//!              key-down                       key-up
//! command ──▶  ignored (no state change)      -
//! space/enter  check(committed = true)        -
//! other   ──▶  pending = true           ──▶   pending? check(committed = false)
//! ```

use crate::host::{KeyEvent, Modifiers};

/// A request to run a match pass now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRequest {
    pub committed_by_whitespace: bool,
}

/// Per-field gate state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeystrokeGate {
    pending_check: bool,
    /// Modifiers that turn a key press into a command shortcut.
    command_modifiers: Modifiers,
}

impl Default for KeystrokeGate {
    fn default() -> Self {
        KeystrokeGate::new(Modifiers::CONTROL | Modifiers::META)
    }
}

impl KeystrokeGate {
    pub fn new(command_modifiers: Modifiers) -> Self {
        KeystrokeGate { pending_check: false, command_modifiers }
    }

    /// Whether a check is deferred to the next key-up.
    pub fn is_pending(&self) -> bool {
        self.pending_check
    }

    pub fn key_down(&mut self, event: &KeyEvent) -> Option<CheckRequest> {
        if event.modifiers.intersects(self.command_modifiers) {
            return None;
        }
        if event.key.is_whitespace_class() {
            return Some(CheckRequest { committed_by_whitespace: true });
        }
        self.pending_check = true;
        None
    }

    pub fn key_up(&mut self, _event: &KeyEvent) -> Option<CheckRequest> {
        if !self.pending_check {
            return None;
        }
        self.pending_check = false;
        Some(CheckRequest { committed_by_whitespace: false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::KeyCode;

    fn key(c: char) -> KeyEvent {
        KeyEvent::from_char(c)
    }

    #[test]
    fn whitespace_checks_on_key_down() {
        let mut gate = KeystrokeGate::default();
        assert_eq!(gate.key_down(&key(' ')), Some(CheckRequest { committed_by_whitespace: true }));
        assert!(!gate.is_pending());
        assert_eq!(gate.key_up(&key(' ')), None);

        assert_eq!(gate.key_down(&key('\n')), Some(CheckRequest { committed_by_whitespace: true }));
    }

    #[test]
    fn other_keys_defer_to_key_up() {
        let mut gate = KeystrokeGate::default();
        assert_eq!(gate.key_down(&key(':')), None);
        assert!(gate.is_pending());
        assert_eq!(gate.key_up(&key(':')), Some(CheckRequest { committed_by_whitespace: false }));
        assert!(!gate.is_pending());
        assert_eq!(gate.key_up(&key(':')), None);
    }

    #[test]
    fn held_key_checks_once_on_release() {
        let mut gate = KeystrokeGate::default();
        for _ in 0..5 {
            assert_eq!(gate.key_down(&key('a')), None);
        }
        assert!(gate.key_up(&key('a')).is_some());
        assert!(gate.key_up(&key('a')).is_none());
    }

    #[test]
    fn held_space_checks_on_every_repeat() {
        let mut gate = KeystrokeGate::default();
        let hits = (0..3).filter(|_| gate.key_down(&key(' ')).is_some()).count();
        assert_eq!(hits, 3);
    }

    #[test]
    fn command_shortcuts_are_ignored() {
        let mut gate = KeystrokeGate::default();
        let ctrl_v = KeyEvent::new(KeyCode::Char('v')).with_modifiers(Modifiers::CONTROL);
        let ctrl_space = KeyEvent::new(KeyCode::Space).with_modifiers(Modifiers::CONTROL);

        assert_eq!(gate.key_down(&ctrl_v), None);
        assert!(!gate.is_pending());
        assert_eq!(gate.key_down(&ctrl_space), None);
        assert_eq!(gate.key_up(&ctrl_v), None);
    }

    #[test]
    fn shift_still_produces_characters() {
        let mut gate = KeystrokeGate::default();
        let shifted = KeyEvent::new(KeyCode::Char(':')).with_modifiers(Modifiers::SHIFT);
        assert_eq!(gate.key_down(&shifted), None);
        assert!(gate.is_pending());
    }

    #[test]
    fn command_key_does_not_clear_pending_check() {
        let mut gate = KeystrokeGate::default();
        gate.key_down(&key('x'));
        gate.key_down(&KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::META));
        assert!(gate.is_pending());
    }
}
