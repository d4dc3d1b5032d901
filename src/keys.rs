//! Unique key generation for new hotspots.

use uuid::Uuid;

use crate::constants::DEFAULT_KEY_PREFIX;
use crate::model::HotspotKey;

/// Source of fresh hotspot keys.
pub trait KeyGenerator {
    /// Produce a key not produced before by this generator.
    fn next_key(&mut self) -> HotspotKey;
}

/// Random v4 UUID keys. Unique across sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidKeys;

impl KeyGenerator for UuidKeys {
    fn next_key(&mut self) -> HotspotKey {
        HotspotKey::new(Uuid::new_v4().simple().to_string())
    }
}

/// Deterministic `prefix-N` keys, counting from 1.
#[derive(Debug, Clone)]
pub struct SequentialKeys {
    prefix: String,
    next_id: u64,
}

impl SequentialKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next_id: 1,
        }
    }
}

impl Default for SequentialKeys {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PREFIX)
    }
}

impl KeyGenerator for SequentialKeys {
    fn next_key(&mut self) -> HotspotKey {
        let id = self.next_id;
        self.next_id += 1;
        HotspotKey::new(format!("{}-{}", self.prefix, id))
    }
}
