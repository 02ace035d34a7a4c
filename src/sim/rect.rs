//! Axis-aligned bounding boxes
//!
//! Every moving object in the game is a rectangle. Coordinates are f32 so
//! fractional fall speeds accumulate instead of truncating to whole pixels.

/// An axis-aligned rectangle: top-left corner plus extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Top edge y coordinate
    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge y coordinate
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Horizontal center
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Rectangle intersection test. Both axis projections must strictly
    /// overlap; rectangles that merely share an edge do not collide.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// Clamp this rectangle horizontally so it lies fully inside `bounds`.
    pub fn clamp_x(&mut self, bounds: &Rect) {
        self.x = self.x.clamp(bounds.x, bounds.x + bounds.w - self.w);
    }
}
