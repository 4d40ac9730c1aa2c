//! Rectangular region with a parent-relative frame.

use serde::Serialize;

/// An immutable axis-aligned rectangle.
///
/// `x`/`y` are the offsets inside the parent region; `left`, `right`, `top`
/// and `bottom` are absolute page coordinates computed from the parent's
/// edges at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl Region {
    /// Creates a root region anchored at the page origin.
    pub fn root(width: f64, height: f64) -> Self {
        Self::new(None, 0.0, 0.0, width, height)
    }

    /// Creates a region offset by `(x, y)` inside `parent`.
    pub fn within(parent: &Region, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Some(parent), x, y, width, height)
    }

    /// Creates a region with an optional parent. A missing parent behaves like
    /// a parent whose edges are all at zero.
    pub fn new(parent: Option<&Region>, x: f64, y: f64, width: f64, height: f64) -> Self {
        let (origin_x, origin_y) = parent.map_or((0.0, 0.0), |p| (p.left, p.top));
        let left = origin_x + x;
        let top = origin_y + y;
        Self {
            x,
            y,
            width,
            height,
            left,
            right: left + width,
            top,
            bottom: top + height,
        }
    }

    /// Returns a child region inset by `horizontal` on the left and right and
    /// by `vertical` (or `horizontal` when `None`) on the top and bottom.
    pub fn shrink(&self, horizontal: f64, vertical: Option<f64>) -> Self {
        let vertical = vertical.unwrap_or(horizontal);
        Self::within(
            self,
            horizontal,
            vertical,
            self.width - horizontal * 2.0,
            self.height - vertical * 2.0,
        )
    }

    /// Horizontal offset within the parent.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical offset within the parent.
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Absolute left edge.
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Absolute right edge.
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Absolute top edge.
    pub fn top(&self) -> f64 {
        self.top
    }

    /// Absolute bottom edge.
    pub fn bottom(&self) -> f64 {
        self.bottom
    }
}
