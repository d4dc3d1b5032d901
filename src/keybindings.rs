//! Keybindings for hotspot editing.
//!
//! Two inputs matter to the editor: the key that deletes a selected hotspot and the
//! modifier that, held during a corner drag, frees that corner from its neighbours.

use hotspot_input::{Key, Modifiers};
use serde::{Deserialize, Serialize};

/// A keyboard modifier usable as the resize modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    #[default]
    Shift,
    Ctrl,
    Alt,
    Meta,
}

impl ModifierKey {
    /// Get the display name for this modifier.
    pub fn name(&self) -> &'static str {
        match self {
            ModifierKey::Shift => "Shift",
            ModifierKey::Ctrl => "Ctrl",
            ModifierKey::Alt => "Alt",
            ModifierKey::Meta => "Meta",
        }
    }

    /// Get all modifiers.
    pub fn all() -> &'static [ModifierKey] {
        &[
            ModifierKey::Shift,
            ModifierKey::Ctrl,
            ModifierKey::Alt,
            ModifierKey::Meta,
        ]
    }

    /// Check if this modifier is held in `modifiers`.
    pub fn is_held(&self, modifiers: &Modifiers) -> bool {
        match self {
            ModifierKey::Shift => modifiers.shift,
            ModifierKey::Ctrl => modifiers.ctrl,
            ModifierKey::Alt => modifiers.alt,
            ModifierKey::Meta => modifiers.meta,
        }
    }
}

/// Keybinding configuration for the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    /// Keys whose release deletes the selected hotspot
    pub delete_keys: Vec<Key>,
    /// Modifier that restricts a resize to the dragged corner
    pub resize_modifier: ModifierKey,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            delete_keys: vec![Key::Delete],
            resize_modifier: ModifierKey::Shift,
        }
    }
}

impl KeyBindings {
    /// Create new keybindings with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_delete_key(&self, key: Key) -> bool {
        self.delete_keys.contains(&key)
    }

    pub fn resize_modifier_held(&self, modifiers: &Modifiers) -> bool {
        self.resize_modifier.is_held(modifiers)
    }
}
