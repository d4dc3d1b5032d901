//! The hotspot editor: routes input events to the drawing machine and to one
//! editing machine per hotspot, and reports every change of the collection.
//!
//! Events arrive in input cycles. A host delivers all events produced by one raw
//! input (a release and the click it synthesizes, say) through [`HotspotEditor::handle_event`]
//! and then calls [`HotspotEditor::end_cycle`], or hands the whole batch to
//! [`HotspotEditor::handle_cycle`].

use std::collections::HashMap;
use std::fmt;

use hotspot_input::{
    Callback, DeferredQueue, Event, InputBus, Key, Modifiers, MouseButton, Point, Rectangle,
};

use crate::config::EditorConfig;
use crate::constants::MAX_KEY_ATTEMPTS;
use crate::coords::to_normalized;
use crate::drawing::DrawingState;
use crate::editing::{EditingState, SpotPart, SpotState};
use crate::error::EditorError;
use crate::hit_test::{self, PointerTarget};
use crate::keybindings::KeyBindings;
use crate::keys::{KeyGenerator, UuidKeys};
use crate::model::{EditAction, Hotspot, HotspotCollection, HotspotKey};

/// Opaque reference to the image the hotspots are drawn over.
///
/// Only its presence matters to the editor; geometry comes from the rendered bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub source: String,
}

impl ImageRef {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Work scheduled for the end of the current input cycle.
#[derive(Debug, Clone, PartialEq)]
enum Deferred {
    ClearAction(HotspotKey),
}

/// Interactive editor for the hotspots of one image.
pub struct HotspotEditor {
    config: EditorConfig,
    keybindings: KeyBindings,
    collection: HotspotCollection,
    drawing: DrawingState,
    /// One editing machine per hotspot of the collection, while an image is set.
    spots: HashMap<HotspotKey, EditingState>,
    bus: InputBus<HotspotKey>,
    deferred: DeferredQueue<Deferred>,
    keys: Box<dyn KeyGenerator>,
    on_change: Callback<Vec<Hotspot>>,
    image: Option<ImageRef>,
    /// Rendered bounding box of the image, in client pixels.
    bounds: Rectangle,
}

impl HotspotEditor {
    /// Create an editor with the default configuration.
    pub fn new() -> Self {
        let config = EditorConfig::default();
        Self {
            keybindings: config.keybindings.to_keybindings(),
            config,
            collection: HotspotCollection::new(),
            drawing: DrawingState::new(),
            spots: HashMap::new(),
            bus: InputBus::new(),
            deferred: DeferredQueue::new(),
            keys: Box::new(UuidKeys),
            on_change: Callback::none(),
            image: None,
            bounds: Rectangle::default(),
        }
    }

    /// Create an editor from a validated configuration.
    pub fn with_config(config: EditorConfig) -> Result<Self, EditorError> {
        config.validate()?;
        let mut editor = Self::new();
        editor.keybindings = config.keybindings.to_keybindings();
        editor.config = config;
        Ok(editor)
    }

    /// Set the callback receiving the whole collection after every change.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec<Hotspot>) + 'static,
    {
        self.on_change = Callback::new(f);
        self
    }

    /// Replace the source of keys for newly drawn hotspots.
    pub fn with_key_generator(mut self, keys: impl KeyGenerator + 'static) -> Self {
        self.keys = Box::new(keys);
        self
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn keybindings(&self) -> &KeyBindings {
        &self.keybindings
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    /// Set or clear the image. Without an image the editor ignores input and all
    /// editing state is dropped.
    pub fn set_image(&mut self, image: Option<ImageRef>) {
        match &image {
            Some(image) => log::debug!("🖼️ Image set: {}", image.source),
            None => log::debug!("🖼️ Image cleared"),
        }
        self.image = image;
        if self.image.is_none() {
            self.drawing.cancel();
            self.deferred.take_pending();
        }
        self.sync_spots();
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Update the rendered bounding box of the image.
    ///
    /// A gesture already in progress keeps the bounds it started with.
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    /// Replace the collection with a host-provided value. Absent means empty.
    ///
    /// Selection survives for keys that are still present. Nothing is reported.
    pub fn set_value(&mut self, value: Option<Vec<Hotspot>>) {
        self.collection = HotspotCollection::from_value(value);
        self.sync_spots();
    }

    /// The current collection, in display order.
    pub fn value(&self) -> &[Hotspot] {
        self.collection.as_slice()
    }

    pub fn collection(&self) -> &HotspotCollection {
        &self.collection
    }

    /// The read-only hotspot being drawn, under the reserved preview key.
    pub fn preview(&self) -> Option<Hotspot> {
        self.image.as_ref()?;
        self.drawing
            .preview()
            .map(|quad| Hotspot::new(HotspotKey::preview(), quad))
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing.is_active()
    }

    pub fn is_selected(&self, key: &HotspotKey) -> bool {
        self.spots.get(key).is_some_and(EditingState::is_selected)
    }

    /// The drag action of a hotspot, including one awaiting its end-of-cycle clear.
    pub fn action(&self, key: &HotspotKey) -> Option<EditAction> {
        self.spots.get(key).and_then(EditingState::action)
    }

    pub fn spot_state(&self, key: &HotspotKey) -> Option<SpotState> {
        self.spots.get(key).map(EditingState::state)
    }

    /// Keys of the selected hotspots, in display order.
    pub fn selected_keys(&self) -> Vec<HotspotKey> {
        self.collection
            .keys()
            .filter(|key| self.is_selected(key))
            .cloned()
            .collect()
    }

    /// Resolve a client point to the element under it.
    pub fn hit_test(&self, position: Point) -> PointerTarget {
        if self.image.is_none() {
            return PointerTarget::Nothing;
        }
        hit_test::hit_test(
            position,
            self.bounds,
            &self.collection,
            |key| self.is_selected(key),
            self.config.handle_size_px,
        )
    }

    /// Export the collection as JSON.
    pub fn value_to_json(&self) -> Result<String, EditorError> {
        Ok(self.collection.to_json()?)
    }

    /// Replace the collection from JSON, as [`Self::set_value`] does.
    pub fn value_from_json(&mut self, json: &str) -> Result<(), EditorError> {
        let value: Vec<Hotspot> = serde_json::from_str(json)?;
        self.set_value(Some(value));
        Ok(())
    }

    /// Process every event of one input cycle, then end the cycle.
    pub fn handle_cycle<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = Event<PointerTarget>>,
    {
        // Leftovers of a cycle the host never ended run before this one starts.
        self.end_cycle();
        for event in events {
            self.handle_event(event);
        }
        self.end_cycle();
    }

    /// Run the work deferred to the end of the current input cycle.
    pub fn end_cycle(&mut self) {
        for task in self.deferred.take_pending() {
            match task {
                Deferred::ClearAction(key) => {
                    if let Some(spot) = self.spots.get_mut(&key) {
                        spot.clear_action();
                    }
                }
            }
        }
    }

    /// Handle a single input event.
    pub fn handle_event(&mut self, event: Event<PointerTarget>) {
        if self.image.is_none() {
            log::trace!("No image, ignoring {:?}", event);
            return;
        }

        match &event {
            Event::PointerPressed {
                button,
                position,
                target,
            } => self.on_press(*button, *position, target),
            Event::PointerMoved {
                position,
                modifiers,
                ..
            } => self.on_move(*position, modifiers),
            Event::PointerReleased {
                button, position, ..
            } => self.on_release(*button, *position),
            Event::PointerLeft { position, target } => self.on_leave(*position, target),
            Event::Click { button, target, .. } => {
                if button.is_primary() {
                    self.on_click(target);
                    self.on_outside_click(&event, target);
                }
            }
            Event::KeyPressed { .. } => {}
            Event::KeyReleased { key, .. } => self.on_key_released(*key, &event),
        }
    }

    // ========================================================================
    // Event handlers
    // ========================================================================

    fn on_press(&mut self, button: MouseButton, position: Point, target: &PointerTarget) {
        if !button.is_primary() {
            return;
        }

        match target {
            PointerTarget::Container => {
                if self.is_editing() {
                    log::debug!("Press on container ignored while a hotspot is being edited");
                    return;
                }
                self.drawing.begin(position, self.bounds);
            }
            PointerTarget::Body(key) => self.press_spot(key, SpotPart::Body, position),
            PointerTarget::Handle(key, corner) => {
                self.press_spot(key, SpotPart::Handle(*corner), position)
            }
            PointerTarget::Nothing => {}
        }
    }

    fn press_spot(&mut self, key: &HotspotKey, part: SpotPart, position: Point) {
        if self.drawing.is_active() || !self.bounds.size().is_drawable() {
            return;
        }
        let normalized = to_normalized(position, self.bounds);
        if let Some(spot) = self.spots.get_mut(key) {
            spot.press(part, normalized);
        }
    }

    fn on_move(&mut self, position: Point, modifiers: &Modifiers) {
        if self.drawing.is_active() {
            self.drawing.update(position);
            return;
        }

        // A pressed hotspot captures the pointer until release.
        let Some(key) = self.pressed_key() else {
            return;
        };
        if !self.bounds.size().is_drawable() {
            return;
        }
        let Some(current) = self.collection.get(&key).map(|h| h.value) else {
            return;
        };

        let free_corner = self.keybindings.resize_modifier_held(modifiers);
        let normalized = to_normalized(position, self.bounds);
        let updated = self
            .spots
            .get_mut(&key)
            .and_then(|spot| spot.drag(normalized, &current, free_corner));

        if let Some(quad) = updated {
            self.collection.update_by_key(&key, quad);
            self.report();
        }
    }

    fn on_release(&mut self, button: MouseButton, position: Point) {
        if !button.is_primary() {
            return;
        }

        if self.drawing.is_active() {
            self.finish_drawing(position);
            return;
        }

        if let Some(key) = self.pressed_key() {
            self.release_spot(&key);
        }
    }

    fn on_leave(&mut self, position: Point, target: &PointerTarget) {
        match target {
            PointerTarget::Container => {
                if self.drawing.is_active() {
                    self.finish_drawing(position);
                }
                if let Some(key) = self.pressed_key() {
                    self.release_spot(&key);
                }
            }
            PointerTarget::Body(key) => {
                if self.spots.get(key).is_some_and(EditingState::is_pressed) {
                    self.release_spot(key);
                }
            }
            PointerTarget::Handle(..) | PointerTarget::Nothing => {}
        }
    }

    /// Click on a hotspot body toggles its selection.
    fn on_click(&mut self, target: &PointerTarget) {
        if self.drawing.is_active() {
            return;
        }
        let PointerTarget::Body(key) = target else {
            return;
        };
        if let Some(spot) = self.spots.get_mut(key) {
            spot.click();
        }
    }

    /// Every subscribed hotspot the click did not land on sees an outside click.
    fn on_outside_click(&mut self, event: &Event<PointerTarget>, target: &PointerTarget) {
        for key in self.bus.subscribers(event) {
            if target.is_part_of(&key) {
                continue;
            }
            if let Some(spot) = self.spots.get_mut(&key) {
                spot.outside_click();
            }
        }
    }

    fn on_key_released(&mut self, key: Key, event: &Event<PointerTarget>) {
        if !self.keybindings.is_delete_key(key) {
            return;
        }

        let doomed: Vec<HotspotKey> = self
            .bus
            .subscribers(event)
            .into_iter()
            .filter(|k| self.spots.get(k).is_some_and(EditingState::can_delete))
            .collect();

        for key in doomed {
            self.collection.delete_by_key(&key);
            self.spots.remove(&key);
            log::info!("🗑️ Deleted hotspot {} ({} remaining)", key, self.collection.len());
            self.report();
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn finish_drawing(&mut self, position: Point) {
        let Some(quad) = self
            .drawing
            .finish(position, self.config.min_draw_size_px)
        else {
            return;
        };

        let Some(key) = self.fresh_key() else {
            log::error!(
                "No usable key after {} attempts, discarding drawn hotspot",
                MAX_KEY_ATTEMPTS
            );
            return;
        };

        self.collection.create(Hotspot::new(key.clone(), quad));
        self.sync_spots();
        log::info!("➕ Created hotspot {} ({} total)", key, self.collection.len());
        self.report();
    }

    /// Next generated key that is neither taken nor the preview key.
    fn fresh_key(&mut self) -> Option<HotspotKey> {
        for _ in 0..MAX_KEY_ATTEMPTS {
            let key = self.keys.next_key();
            if !key.is_preview() && !self.collection.contains_key(&key) {
                return Some(key);
            }
            log::warn!("Key generator produced unusable key {}, retrying", key);
        }
        None
    }

    fn release_spot(&mut self, key: &HotspotKey) {
        if self.spots.get_mut(key).is_some_and(|spot| spot.release()) {
            self.deferred.schedule(Deferred::ClearAction(key.clone()));
        }
    }

    /// The hotspot holding the pointer, if any.
    fn pressed_key(&self) -> Option<HotspotKey> {
        self.spots
            .values()
            .find(|spot| spot.is_pressed())
            .map(|spot| spot.key().clone())
    }

    /// True while any hotspot is held or has an uncleared drag action.
    fn is_editing(&self) -> bool {
        self.spots
            .values()
            .any(|spot| spot.is_pressed() || spot.action().is_some())
    }

    /// Keep exactly one editing machine per hotspot while an image is shown.
    fn sync_spots(&mut self) {
        if self.image.is_none() {
            self.spots.clear();
            return;
        }

        let collection = &self.collection;
        self.spots.retain(|key, _| collection.contains_key(key));
        for key in self.collection.keys() {
            if !self.spots.contains_key(key) {
                self.spots
                    .insert(key.clone(), EditingState::new(key.clone(), &self.bus));
            }
        }
    }

    fn report(&self) {
        self.on_change.call(self.collection.to_vec());
    }
}

impl Default for HotspotEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HotspotEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotspotEditor")
            .field("hotspots", &self.collection.len())
            .field("drawing", &self.drawing.is_active())
            .field("selected", &self.selected_keys())
            .field("image", &self.image)
            .field("bounds", &self.bounds)
            .finish()
    }
}
