//! Platform-agnostic keyboard input representation.
//!
//! Platform-specific code converts native key events into these types before
//! they reach the contract. Only keys the editor can meaningfully react to
//! are named; everything else arrives as `Unidentified`.

use smol_str::SmolStr;

/// Key values for keyboard input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key.
    Character(SmolStr),

    /// Unknown/unidentified key.
    Unidentified,

    // === Whitespace / editing ===
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,

    // === Navigation ===
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    /// Create a character key.
    pub fn character(s: impl Into<SmolStr>) -> Self {
        Self::Character(s.into())
    }

    /// Check if this is a navigation key.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::ArrowLeft
                | Self::ArrowRight
                | Self::ArrowUp
                | Self::ArrowDown
                | Self::Home
                | Self::End
                | Self::PageUp
                | Self::PageDown
        )
    }
}

/// Modifier key state for a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const ALT: Self = Self {
        ctrl: false,
        alt: true,
        shift: false,
        meta: false,
    };

    pub const SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
        meta: false,
    };

    pub const META: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
        meta: true,
    };

    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        alt: false,
        shift: true,
        meta: false,
    };

    pub const META_SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
        meta: true,
    };

    /// Get the primary modifier for the platform (Cmd on Mac, Ctrl elsewhere).
    pub fn primary(is_mac: bool) -> Self {
        if is_mac { Self::META } else { Self::CTRL }
    }

    /// Whether the platform's primary command modifier is held. Accepts either
    /// Ctrl or Meta so callers don't need to thread platform detection through.
    pub fn has_primary(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// A keyboard event as delivered to the contract: key plus modifier state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A key press with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::NONE,
        }
    }

    /// The typed character, when this event carries one.
    pub fn char_value(&self) -> Option<&str> {
        match &self.key {
            Key::Character(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys() {
        assert!(Key::ArrowUp.is_navigation());
        assert!(Key::PageDown.is_navigation());
        assert!(!Key::Backspace.is_navigation());
        assert!(!Key::character("x").is_navigation());
    }

    #[test]
    fn test_primary_modifier() {
        assert_eq!(Modifiers::primary(true), Modifiers::META);
        assert_eq!(Modifiers::primary(false), Modifiers::CTRL);
        assert!(Modifiers::CTRL.has_primary());
        assert!(Modifiers::META.has_primary());
        assert!(!Modifiers::SHIFT.has_primary());
    }

    #[test]
    fn test_char_value() {
        let event = KeyEvent::new(Key::character("b"), Modifiers::CTRL);
        assert_eq!(event.char_value(), Some("b"));
        assert_eq!(KeyEvent::plain(Key::Enter).char_value(), None);
    }
}
