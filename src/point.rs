//! Planar points with non-negative coordinates.
//!
//! A point stands for the axis-aligned rectangle spanned between the origin
//! and `(x, y)`; its unclipped contribution is `x * y`. The engine never
//! mutates stored coordinates: any clipped width/height it needs during a
//! scan lives in locals, so the collection stays value-identical across runs.

/// A point in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unclipped rectangle area `x * y`.
    #[inline]
    pub fn area(&self) -> f64 {
        self.x * self.y
    }
}
