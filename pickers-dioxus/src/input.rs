//! Keyboard decoding for the popover key listener.
//!
//! The wrapper only reacts to Enter while open; every other key is left
//! to the picker content, with no default behavior suppressed.

use dioxus::prelude::Key;

/// Keys the inline popover wrapper acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopoverKey {
    /// Confirm the current value and close the popover.
    Enter,
}

/// Decode a symbolic key into a popover action key.
///
/// Returns `None` for keys the wrapper ignores.
#[must_use]
pub fn decode_popover_key(key: &Key) -> Option<PopoverKey> {
    match key {
        Key::Enter => Some(PopoverKey::Enter),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_is_decoded() {
        assert_eq!(decode_popover_key(&Key::Enter), Some(PopoverKey::Enter));
    }

    #[test]
    fn characters_are_ignored() {
        assert_eq!(decode_popover_key(&Key::Character("a".to_string())), None);
        assert_eq!(decode_popover_key(&Key::Character(" ".to_string())), None);
    }

    #[test]
    fn other_special_keys_are_ignored() {
        assert_eq!(decode_popover_key(&Key::Escape), None);
        assert_eq!(decode_popover_key(&Key::Tab), None);
        assert_eq!(decode_popover_key(&Key::ArrowDown), None);
    }
}
