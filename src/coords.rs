//! Coordinate model.
//!
//! Hotspots are stored in normalized coordinates: each axis is a fraction of the
//! image bounding box, so a region keeps its place when the image is rendered at a
//! different size. Pointer events arrive in client pixels.

use hotspot_input::{Point, Rectangle, Size};

use crate::model::Quad;

/// Convert a client-space point into normalized coordinates of `bounds`.
pub fn to_normalized(point: Point, bounds: Rectangle) -> Point {
    Point::new(
        (point.x - bounds.x) / bounds.width,
        (point.y - bounds.y) / bounds.height,
    )
}

/// Convert a normalized point into absolute pixels for a box of `size`.
pub fn to_absolute(point: Point, size: Size) -> Point {
    Point::new(point.x * size.width, point.y * size.height)
}

/// Rectangle corners spanned by two opposite points, in canonical order
/// (top-left, top-right, bottom-right, bottom-left) whatever the drag direction.
pub fn quad_from_start_end(start: Point, end: Point) -> Quad {
    let (left, right) = (start.x.min(end.x), start.x.max(end.x));
    let (top, bottom) = (start.y.min(end.y), start.y.max(end.y));
    Quad::new([
        Point::new(left, top),
        Point::new(right, top),
        Point::new(right, bottom),
        Point::new(left, bottom),
    ])
}
