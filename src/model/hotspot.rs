//! Hotspot data model: keys, quadrilaterals and edit actions.

use std::fmt;

use hotspot_input::{Point, Size};
use serde::{Deserialize, Serialize};

use crate::constants::PREVIEW_KEY;

/// Opaque, stable identifier of a hotspot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HotspotKey(String);

impl HotspotKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key of the read-only in-progress drawing preview.
    pub fn preview() -> Self {
        Self(PREVIEW_KEY.to_string())
    }

    pub fn is_preview(&self) -> bool {
        self.0 == PREVIEW_KEY
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HotspotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HotspotKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for HotspotKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// A corner of a hotspot quadrilateral, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// All corners in the canonical point order of a [`Quad`].
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// Index of this corner inside a [`Quad`].
    pub fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomRight => 2,
            Corner::BottomLeft => 3,
        }
    }

    /// Corners that follow this one during a coupled resize: the corner sharing its
    /// x coordinate (moved by `dx` only) and the corner sharing its y coordinate
    /// (moved by `dy` only). The opposite corner never moves.
    pub fn coupled(self) -> (Corner, Corner) {
        match self {
            Corner::TopLeft => (Corner::BottomLeft, Corner::TopRight),
            Corner::TopRight => (Corner::BottomRight, Corner::TopLeft),
            Corner::BottomRight => (Corner::TopRight, Corner::BottomLeft),
            Corner::BottomLeft => (Corner::TopLeft, Corner::BottomRight),
        }
    }

    /// Stable lowercase name, as carried by handle elements.
    pub fn name(self) -> &'static str {
        match self {
            Corner::TopLeft => "top_left",
            Corner::TopRight => "top_right",
            Corner::BottomRight => "bottom_right",
            Corner::BottomLeft => "bottom_left",
        }
    }
}

/// What a drag on a selected hotspot does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditAction {
    /// Translate the whole quadrilateral.
    Move,
    /// Drag one corner.
    Resize(Corner),
}

impl EditAction {
    /// Apply a normalized displacement to `quad`.
    ///
    /// `free_corner` is the resize modifier: when held, a resize moves the dragged
    /// corner alone.
    pub fn apply(self, quad: &Quad, dx: f32, dy: f32, free_corner: bool) -> Quad {
        match self {
            EditAction::Move => quad.translate(dx, dy),
            EditAction::Resize(corner) if free_corner => quad.move_corner(corner, dx, dy),
            EditAction::Resize(corner) => quad.resize_corner(corner, dx, dy),
        }
    }
}

impl fmt::Display for EditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditAction::Move => f.write_str("move"),
            EditAction::Resize(corner) => write!(f, "resize_{}", corner.name()),
        }
    }
}

/// Four normalized points: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quad([Point; 4]);

impl Quad {
    pub fn new(points: [Point; 4]) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point; 4] {
        &self.0
    }

    pub fn corner(&self, corner: Corner) -> Point {
        self.0[corner.index()]
    }

    /// Translate all four points by the same delta.
    pub fn translate(&self, dx: f32, dy: f32) -> Quad {
        Quad(self.0.map(|p| p.offset(dx, dy)))
    }

    /// Move a single corner, leaving the other three untouched.
    pub fn move_corner(&self, corner: Corner, dx: f32, dy: f32) -> Quad {
        let mut points = self.0;
        points[corner.index()] = points[corner.index()].offset(dx, dy);
        Quad(points)
    }

    /// Move a corner and drag its two edge neighbours along the shared axis,
    /// keeping an axis-aligned rectangle axis-aligned.
    pub fn resize_corner(&self, corner: Corner, dx: f32, dy: f32) -> Quad {
        let (shares_x, shares_y) = corner.coupled();
        let mut points = self.move_corner(corner, dx, dy).0;
        points[shares_x.index()].x += dx;
        points[shares_y.index()].y += dy;
        Quad(points)
    }

    /// Scale normalized points into absolute pixels for a box of `size`.
    pub fn to_absolute(&self, size: Size) -> [Point; 4] {
        self.0.map(|p| crate::coords::to_absolute(p, size))
    }

    /// Check if a normalized point is inside the quadrilateral (ray casting).
    pub fn contains(&self, point: Point) -> bool {
        let mut inside = false;
        let mut j = self.0.len() - 1;
        for i in 0..self.0.len() {
            let (vi, vj) = (self.0[i], self.0[j]);
            if ((vi.y > point.y) != (vj.y > point.y))
                && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

impl From<[[f32; 2]; 4]> for Quad {
    fn from(points: [[f32; 2]; 4]) -> Self {
        Quad(points.map(Point::from))
    }
}

/// A named quadrilateral region over an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub key: HotspotKey,
    pub value: Quad,
}

impl Hotspot {
    pub fn new(key: impl Into<HotspotKey>, value: Quad) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}
