//! Integer pixel geometry.

/// A pixel coordinate.
///
/// Coordinates are signed so that geometry derived from offsets (shadow
/// displacement, accent stroke tails) can fall outside the canvas; the
/// drawing primitives clip at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// An axis-aligned pixel rectangle, inclusive on both corners.
///
/// Invariant: `x0 <= x1` and `y0 <= y1`, enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    /// Create a rectangle from two corners, normalizing their order.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// The square rectangle covering a whole `size` x `size` canvas.
    pub fn square(size: u32) -> Self {
        let max = size.saturating_sub(1) as i32;
        Self::new(0, 0, max, max)
    }

    /// Shrink the rectangle by `margin` on every side.
    ///
    /// Corners are re-normalized, so an inset larger than the half-extent
    /// collapses the rectangle rather than inverting it.
    pub fn inset(self, margin: i32) -> Self {
        Self::new(
            self.x0 + margin,
            self.y0 + margin,
            self.x1 - margin,
            self.y1 - margin,
        )
    }

    /// Translate the rectangle by an offset.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x0: self.x0 + dx,
            y0: self.y0 + dy,
            x1: self.x1 + dx,
            y1: self.y1 + dy,
        }
    }

    pub fn width(&self) -> u32 {
        (self.x1 - self.x0 + 1) as u32
    }

    pub fn height(&self) -> u32 {
        (self.y1 - self.y0 + 1) as u32
    }

    /// Centre of the rectangle in continuous coordinates.
    pub fn center(&self) -> (f32, f32) {
        (
            (self.x0 + self.x1) as f32 / 2.0,
            (self.y0 + self.y1) as f32 / 2.0,
        )
    }
}
