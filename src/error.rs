//! Error types for editor setup and value import/export.
//!
//! The interaction state machines never fail; these cover the surrounding layer.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors from building an editor or exchanging its value as JSON.
#[derive(Error, Debug)]
pub enum EditorError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
