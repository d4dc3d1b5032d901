//! Configuration file support for the hotspot editor.
//!
//! Editor tunables (draw threshold, handle size), keybindings and log verbosity,
//! serialized as versioned JSON so hosts can ship or export them.

use std::path::Path;

use hotspot_input::Key;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HANDLE_SIZE_PX, DEFAULT_MIN_DRAW_SIZE_PX};
use crate::keybindings::{KeyBindings, ModifierKey};

/// Log level setting for the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get the display name for this log level.
    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Error => "Error",
            LogLevel::Warn => "Warn",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::Trace => "Trace",
        }
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Editor configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Both sides of a drawn rectangle must exceed this many pixels
    #[serde(default = "default_min_draw_size_px")]
    pub min_draw_size_px: f32,

    /// Side length of corner handles, in pixels
    #[serde(default = "default_handle_size_px")]
    pub handle_size_px: f32,

    /// Keybinding configuration
    #[serde(default)]
    pub keybindings: KeyBindingsConfig,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_min_draw_size_px() -> f32 {
    DEFAULT_MIN_DRAW_SIZE_PX
}

fn default_handle_size_px() -> f32 {
    DEFAULT_HANDLE_SIZE_PX
}

/// Keybinding configuration section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindingsConfig {
    /// Keys whose release deletes the selected hotspot
    #[serde(default = "default_delete_keys")]
    pub delete: Vec<Key>,

    /// Modifier restricting a resize to the dragged corner
    #[serde(default)]
    pub resize_modifier: ModifierKey,
}

fn default_delete_keys() -> Vec<Key> {
    vec![Key::Delete]
}

impl Default for KeyBindingsConfig {
    fn default() -> Self {
        Self {
            delete: default_delete_keys(),
            resize_modifier: ModifierKey::default(),
        }
    }
}

impl From<&KeyBindings> for KeyBindingsConfig {
    fn from(bindings: &KeyBindings) -> Self {
        Self {
            delete: bindings.delete_keys.clone(),
            resize_modifier: bindings.resize_modifier,
        }
    }
}

impl KeyBindingsConfig {
    /// Convert to runtime keybindings.
    pub fn to_keybindings(&self) -> KeyBindings {
        KeyBindings {
            delete_keys: self.delete.clone(),
            resize_modifier: self.resize_modifier,
        }
    }
}

impl EditorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            min_draw_size_px: default_min_draw_size_px(),
            handle_size_px: default_handle_size_px(),
            keybindings: KeyBindingsConfig::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Check values a host could have written by hand.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_draw_size_px.is_finite() || self.min_draw_size_px < 0.0 {
            return Err(ConfigError::invalid_value(
                "min_draw_size_px",
                format!("must be a non-negative number, got {}", self.min_draw_size_px),
            ));
        }
        if !self.handle_size_px.is_finite() || self.handle_size_px <= 0.0 {
            return Err(ConfigError::invalid_value(
                "handle_size_px",
                format!("must be a positive number, got {}", self.handle_size_px),
            ));
        }
        if self.keybindings.delete.is_empty() {
            return Err(ConfigError::invalid_value(
                "keybindings.delete",
                "at least one delete key is required",
            ));
        }
        Ok(())
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        config.validate()?;
        Ok(config)
    }

    /// Get the default filename for config export.
    pub fn default_filename() -> &'static str {
        "hotspot-config.json"
    }

    /// Load configuration from a JSON file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a JSON file, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A field holds a value the editor cannot use
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ConfigError {
    /// Create an invalid value error.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}
