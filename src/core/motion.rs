//! Animation helpers shared by several sections

use super::beam::Point;

/// Maximum parallax shift of the hero grid, in px
pub const PARALLAX_RANGE: f64 = 20.0;

/// Element bounds relative to the viewport
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Background offset for a pointer at `pointer` (viewport coordinates)
/// over `rect`. Degenerate rects yield no offset.
pub fn parallax_offset(pointer: Point, rect: Rect) -> Point {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return Point::default();
    }
    let x = pointer.x - rect.left;
    let y = pointer.y - rect.top;
    Point::new(
        x / rect.width * PARALLAX_RANGE,
        y / rect.height * PARALLAX_RANGE,
    )
}

/// `background-position` value for a parallax offset
pub fn background_position(offset: Point) -> String {
    format!("{}px {}px", offset.x, offset.y)
}

/// Entry delay of the `index`-th element in a staggered group, in seconds,
/// rounded to whole milliseconds so it prints cleanly in CSS
pub fn stagger_delay(index: usize, step_s: f64) -> f64 {
    (step_s * (index as f64 + 1.0) * 1000.0).round() / 1000.0
}
