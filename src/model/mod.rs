//! Data models for the hotspot editor.

mod collection;
mod hotspot;

pub use collection::HotspotCollection;
pub use hotspot::{Corner, EditAction, Hotspot, HotspotKey, Quad};
