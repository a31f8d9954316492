//! Keyboard input event types for swipeable views.
//!
//! Platform integrations translate their key events into these types; the
//! views only react to navigation keys.

use std::fmt;

/// Type of keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventType {
    KeyDown,
    KeyUp,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Returns true if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Physical keys the views can respond to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    PageUp,
    PageDown,

    /// Key not recognized or not mapped.
    Unknown,
}

/// A keyboard input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key_code: KeyCode,
    pub modifiers: Modifiers,
    pub event_type: KeyEventType,
}

impl KeyEvent {
    pub fn new(key_code: KeyCode, modifiers: Modifiers, event_type: KeyEventType) -> Self {
        Self {
            key_code,
            modifiers,
            event_type,
        }
    }

    /// Creates a key down event without modifiers.
    pub fn key_down(key_code: KeyCode) -> Self {
        Self::new(key_code, Modifiers::NONE, KeyEventType::KeyDown)
    }

    pub fn key_down_with_modifiers(key_code: KeyCode, modifiers: Modifiers) -> Self {
        Self::new(key_code, modifiers, KeyEventType::KeyDown)
    }

    pub fn key_up(key_code: KeyCode) -> Self {
        Self::new(key_code, Modifiers::NONE, KeyEventType::KeyUp)
    }

    pub fn is_key_down(&self) -> bool {
        self.event_type == KeyEventType::KeyDown
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyEvent({:?}, {:?})", self.key_code, self.event_type)
    }
}
