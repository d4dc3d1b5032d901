//! Hotspot - interactive quadrilateral regions over an image
//!
//! Users draw axis-aligned hotspots by dragging over an image, select them by
//! clicking, move or resize them by dragging bodies and corner handles, and delete
//! them with a key. Coordinates are normalized to the image bounding box, so the
//! reported collection is independent of the rendered size.

pub mod config;
pub mod constants;
pub mod coords;
pub mod drawing;
pub mod editing;
pub mod editor;
pub mod error;
pub mod keybindings;
pub mod keys;
pub mod model;

#[cfg(test)]
mod tests;

pub use config::{ConfigError, EditorConfig, KeyBindingsConfig, LogLevel, CONFIG_VERSION};
pub use editing::{SpotPart, SpotState};
pub use editor::{HotspotEditor, ImageRef};
pub use error::EditorError;
pub use hit_test::{handle_rect, PointerTarget};
pub use keybindings::{KeyBindings, ModifierKey};
pub use keys::{KeyGenerator, SequentialKeys, UuidKeys};
pub use model::{Corner, EditAction, Hotspot, HotspotCollection, HotspotKey, Quad};

pub use hotspot_input::{Event, Key, Modifiers, MouseButton, Point, Rectangle, Size};
