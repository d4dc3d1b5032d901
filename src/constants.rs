//! Global constants for the hotspot editor

/// Minimum drawn width and height, in pixels, for a drag to create a hotspot.
/// Both dimensions must exceed it.
pub const DEFAULT_MIN_DRAW_SIZE_PX: f32 = 5.0;

/// Side length of a corner handle, in pixels.
pub const DEFAULT_HANDLE_SIZE_PX: f32 = 12.0;

/// Reserved key of the in-progress drawing preview.
pub const PREVIEW_KEY: &str = "active";

/// Generated keys tried for one new hotspot before giving up.
pub const MAX_KEY_ATTEMPTS: usize = 16;

/// Prefix used by sequential key generation.
pub const DEFAULT_KEY_PREFIX: &str = "hotspot";
