//! Per-hotspot editing state machine: selection, move and resize.
//!
//! ```text
//!  Unselected --click body--> SelectedIdle --press body/handle--> SelectedDragging
//!      ^                         |  ^                                   |
//!      +---click body / outside--+  +------release / leave (deferred)---+
//! ```
//!
//! The drag action is resolved lazily on the first move after a press, from the
//! element that was pressed. On release the action is not cleared immediately: the
//! owner schedules [`EditingState::clear_action`] for the end of the input cycle so a
//! trailing click of the same gesture still sees it and does not toggle selection.

use hotspot_input::{EventCategory, EventFilter, InputBus, Point, Subscription};

use crate::model::{Corner, EditAction, HotspotKey, Quad};

/// Element of a hotspot that received a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotPart {
    /// The quadrilateral itself.
    Body,
    /// One of the corner handles shown while selected.
    Handle(Corner),
}

impl SpotPart {
    /// The action a drag started on this element performs.
    pub fn action(self) -> EditAction {
        match self {
            SpotPart::Body => EditAction::Move,
            SpotPart::Handle(corner) => EditAction::Resize(corner),
        }
    }
}

/// Observable state of one hotspot's editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotState {
    Unselected,
    SelectedIdle,
    SelectedDragging,
}

/// Editing state of a single rendered hotspot.
///
/// Holds a global input subscription for outside clicks and key releases for its
/// whole lifetime; dropping the state releases it.
#[derive(Debug)]
pub struct EditingState {
    key: HotspotKey,
    /// Selected.
    active: bool,
    action: Option<EditAction>,
    last_position: Point,
    /// Element under the pointer while the button is held.
    pressed: Option<SpotPart>,
    _subscription: Subscription<HotspotKey>,
}

impl EditingState {
    /// Create an unselected editor for `key`, registering its global observers.
    pub fn new(key: HotspotKey, bus: &InputBus<HotspotKey>) -> Self {
        let subscription = bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Pointer, EventCategory::Keyboard]),
            key.clone(),
        );
        Self {
            key,
            active: false,
            action: None,
            last_position: Point::zero(),
            pressed: None,
            _subscription: subscription,
        }
    }

    pub fn key(&self) -> &HotspotKey {
        &self.key
    }

    pub fn state(&self) -> SpotState {
        match (self.active, self.pressed) {
            (false, _) => SpotState::Unselected,
            (true, None) => SpotState::SelectedIdle,
            (true, Some(_)) => SpotState::SelectedDragging,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.active
    }

    /// The resolved drag action, including one awaiting its deferred clear.
    pub fn action(&self) -> Option<EditAction> {
        self.action
    }

    /// True while the pointer button is held on this hotspot.
    pub fn is_pressed(&self) -> bool {
        self.pressed.is_some()
    }

    /// Pointer pressed on `part` at normalized `position`.
    ///
    /// Only a selected hotspot starts dragging; returns whether it did.
    pub fn press(&mut self, part: SpotPart, position: Point) -> bool {
        if !self.active {
            return false;
        }
        self.pressed = Some(part);
        self.last_position = position;
        log::debug!("Hotspot {}: pressed {:?}", self.key, part);
        true
    }

    /// Pointer moved to normalized `position` while pressed.
    ///
    /// Resolves the action on first use, applies the displacement since the last
    /// position to `current` and returns the new quad to commit.
    pub fn drag(&mut self, position: Point, current: &Quad, free_corner: bool) -> Option<Quad> {
        if !self.active {
            return None;
        }
        let part = self.pressed?;

        let action = match self.action {
            Some(action) => action,
            None => {
                let action = part.action();
                log::debug!("Hotspot {}: action resolved to {}", self.key, action);
                self.action = Some(action);
                action
            }
        };

        let (dx, dy) = position.delta_from(self.last_position);
        self.last_position = position;
        log::trace!(
            "Hotspot {}: {} by ({:.4}, {:.4}), free={}",
            self.key,
            action,
            dx,
            dy,
            free_corner
        );
        Some(action.apply(current, dx, dy, free_corner))
    }

    /// Pointer released or left this hotspot's surface.
    ///
    /// Returns true if the owner should schedule [`Self::clear_action`] for the end
    /// of the cycle.
    pub fn release(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.pressed = None;
        true
    }

    /// Deferred end of a drag.
    pub fn clear_action(&mut self) {
        if let Some(action) = self.action.take() {
            log::debug!("Hotspot {}: finished {}", self.key, action);
        }
    }

    /// Click on the body. Toggles selection unless a drag action is pending.
    ///
    /// Returns whether the selection changed.
    pub fn click(&mut self) -> bool {
        if self.action.is_some() {
            return false;
        }
        self.pressed = None;
        self.active = !self.active;
        log::debug!(
            "🔍 Hotspot {}: {}",
            self.key,
            if self.active { "selected" } else { "deselected" }
        );
        true
    }

    /// Click anywhere outside this hotspot. Deselects a selected, idle hotspot.
    pub fn outside_click(&mut self) -> bool {
        if !self.active || self.action.is_some() {
            return false;
        }
        self.active = false;
        self.pressed = None;
        log::debug!("Hotspot {}: deselected by outside click", self.key);
        true
    }

    /// Whether a delete key release should remove this hotspot now.
    ///
    /// Never while the pointer still holds it, even before the first move.
    pub fn can_delete(&self) -> bool {
        self.active && self.action.is_none() && self.pressed.is_none()
    }
}
