//! Input events delivered by the host surface.
//!
//! Pointer events carry client-pixel positions and the element the host resolved the
//! pointer to; keyboard events carry the key and held modifiers.

use serde::{Deserialize, Serialize};

use crate::Point;

/// Input events delivered by the rendering surface.
///
/// `T` is the element the host resolved the pointer to (container, a region body,
/// a handle...). Keyboard events carry no target; they are observed globally.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<T> {
    /// Pointer button pressed over `target`.
    PointerPressed {
        button: MouseButton,
        position: Point,
        target: T,
    },
    /// Pointer moved. Modifiers are sampled at the time of the move.
    PointerMoved {
        position: Point,
        modifiers: Modifiers,
        target: T,
    },
    /// Pointer button released.
    PointerReleased {
        button: MouseButton,
        position: Point,
        target: T,
    },
    /// Pointer left the surface identified by `target`.
    PointerLeft { position: Point, target: T },
    /// A press and release on the same element. Hosts deliver it after the
    /// release, inside the same input cycle.
    Click {
        button: MouseButton,
        position: Point,
        target: T,
    },
    /// Keyboard key pressed.
    KeyPressed { key: Key, modifiers: Modifiers },
    /// Keyboard key released.
    KeyReleased { key: Key, modifiers: Modifiers },
}

impl<T> Event<T> {
    /// Category used by subscription filters.
    pub fn category(&self) -> EventCategory {
        match self {
            Event::KeyPressed { .. } | Event::KeyReleased { .. } => EventCategory::Keyboard,
            _ => EventCategory::Pointer,
        }
    }
}

/// Coarse event grouping used to filter global subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    Pointer,
    Keyboard,
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

impl MouseButton {
    /// The primary (usually left) button.
    pub fn is_primary(self) -> bool {
        matches!(self, MouseButton::Left)
    }
}

/// Keyboard keys (simplified set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Space,
    Shift,
    Control,
    Alt,
    Meta,
}

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}
