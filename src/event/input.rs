//! Input primitives: keys and modifier state.
//!
//! Defines [`Key`], [`Modifiers`] and [`KeyEvent`]. These are deliberately
//! backend-agnostic so the widgets never depend on how the host sources its
//! input.

use std::ops::{BitAnd, BitOr};

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from any input backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A keyboard event with key and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key event with no modifiers held.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }

    /// Whether Shift is held.
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
