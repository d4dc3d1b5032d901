//! Ordered, key-addressed hotspot storage.

use serde::{Deserialize, Serialize};

use super::hotspot::{Hotspot, HotspotKey, Quad};

/// The hotspots over one image, in display order.
///
/// Keys are unique. Every mutation returns the full resulting sequence, which is
/// what gets reported upward.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotspotCollection {
    hotspots: Vec<Hotspot>,
}

impl HotspotCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a host-provided value. An absent value is an empty collection.
    ///
    /// Later duplicates of a key are dropped so keys stay unique.
    pub fn from_value(value: Option<Vec<Hotspot>>) -> Self {
        let mut collection = Self::new();
        for hotspot in value.unwrap_or_default() {
            if collection.contains_key(&hotspot.key) {
                log::warn!("Ignoring duplicate hotspot key {}", hotspot.key);
                continue;
            }
            collection.hotspots.push(hotspot);
        }
        collection
    }

    /// Append a hotspot.
    pub fn create(&mut self, hotspot: Hotspot) -> &[Hotspot] {
        if self.contains_key(&hotspot.key) {
            log::warn!("Hotspot key {} already present, not appending", hotspot.key);
        } else {
            self.hotspots.push(hotspot);
        }
        &self.hotspots
    }

    /// Replace the value of the hotspot with `key`. No-op if absent.
    pub fn update_by_key(&mut self, key: &HotspotKey, value: Quad) -> &[Hotspot] {
        if let Some(hotspot) = self.hotspots.iter_mut().find(|h| &h.key == key) {
            hotspot.value = value;
        }
        &self.hotspots
    }

    /// Remove the hotspot with `key`. No-op if absent.
    pub fn delete_by_key(&mut self, key: &HotspotKey) -> &[Hotspot] {
        self.hotspots.retain(|h| &h.key != key);
        &self.hotspots
    }

    pub fn get(&self, key: &HotspotKey) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| &h.key == key)
    }

    pub fn contains_key(&self, key: &HotspotKey) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Hotspot> {
        self.hotspots.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &HotspotKey> {
        self.hotspots.iter().map(|h| &h.key)
    }

    pub fn as_slice(&self) -> &[Hotspot] {
        &self.hotspots
    }

    pub fn to_vec(&self) -> Vec<Hotspot> {
        self.hotspots.clone()
    }

    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    /// Export to a pretty JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import from a JSON array of `{ key, value }` objects.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Vec<Hotspot> = serde_json::from_str(json)?;
        Ok(Self::from_value(Some(value)))
    }
}
