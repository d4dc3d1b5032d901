//! Drawing state machine: one drag over empty canvas creates one hotspot.

use hotspot_input::{Point, Rectangle};

use crate::coords::{quad_from_start_end, to_normalized};
use crate::model::Quad;

/// State for the hotspot currently being drawn.
///
/// Idle until a gesture starts; the container bounds are captured once at that point
/// and reused for every later event of the gesture.
#[derive(Debug, Clone, Default)]
pub struct DrawingState {
    active: bool,
    start: Point,
    end: Point,
    /// Client position of the press, for the size threshold.
    start_px: Point,
    bounds: Rectangle,
}

impl DrawingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if we're currently drawing.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Normalized start of the gesture.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Normalized latest pointer position of the gesture.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Start a gesture at client position `position` over `bounds`.
    ///
    /// Returns false, staying idle, if a gesture is already running or the bounds
    /// have no drawable area.
    pub fn begin(&mut self, position: Point, bounds: Rectangle) -> bool {
        if self.active {
            return false;
        }
        if !bounds.size().is_drawable() {
            log::debug!("Drawing: ignoring press over empty bounds {:?}", bounds);
            return false;
        }

        self.bounds = bounds;
        self.start_px = position;
        self.start = to_normalized(position, bounds);
        self.end = self.start;
        self.active = true;
        log::debug!(
            "✏️ Drawing: STARTED at ({:.3}, {:.3})",
            self.start.x,
            self.start.y
        );
        true
    }

    /// Track the pointer. Only affects the preview.
    pub fn update(&mut self, position: Point) {
        if self.active {
            self.end = to_normalized(position, self.bounds);
            log::trace!("Drawing: MOVE to ({:.3}, {:.3})", self.end.x, self.end.y);
        }
    }

    /// End the gesture at client position `position`.
    ///
    /// Returns the new quad if both spanned dimensions exceed `min_size_px`,
    /// otherwise discards the gesture. The machine is idle afterwards either way.
    pub fn finish(&mut self, position: Point, min_size_px: f32) -> Option<Quad> {
        if !self.active {
            return None;
        }

        self.end = to_normalized(position, self.bounds);
        self.active = false;

        let (dx, dy) = position.delta_from(self.start_px);
        let (width, height) = (dx.abs(), dy.abs());
        if width > min_size_px && height > min_size_px {
            log::debug!("Drawing: END with {:.1}x{:.1}px selection", width, height);
            Some(quad_from_start_end(self.start, self.end))
        } else {
            log::debug!(
                "Drawing: discarded {:.1}x{:.1}px selection (minimum {:.1}px)",
                width,
                height,
                min_size_px
            );
            None
        }
    }

    /// Abandon the gesture without creating anything.
    pub fn cancel(&mut self) {
        if self.active {
            log::debug!("❌ Drawing cancelled");
        }
        self.active = false;
    }

    /// The in-progress rectangle, while drawing.
    pub fn preview(&self) -> Option<Quad> {
        self.active
            .then(|| quad_from_start_end(self.start, self.end))
    }
}
