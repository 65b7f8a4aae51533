//! Pixel-space geometry and millimeter/pixel conversion.
//!
//! Page elements are stored in millimeters (the print domain) while dragging
//! and snapping happen in CSS pixels (the screen domain). Everything the
//! engine computes is in pixels; [`mm_to_px`] is applied once on the way in
//! and the host applies [`px_to_mm`] before persisting corrected positions.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::consts::MM_TO_PX;

/// Convert a millimeter coordinate or length to CSS pixels.
#[must_use]
pub fn mm_to_px(mm: f64) -> f64 {
    mm * MM_TO_PX
}

/// Convert a pixel coordinate or length back to millimeters.
#[must_use]
pub fn px_to_mm(px: f64) -> f64 {
    px / MM_TO_PX
}

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PxPoint {
    pub x: f64,
    pub y: f64,
}

impl PxPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The live pixel bounding box of a dragged element.
///
/// Only the left/top corner and the size are stored; the right/bottom edges
/// and the centers are derived so the box cannot disagree with itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PxRect {
    /// Left edge in pixels.
    pub left: f64,
    /// Top edge in pixels.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl PxRect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Right edge in pixels.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge in pixels.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Horizontal center in pixels.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical center in pixels.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// The top-left corner as a point.
    #[must_use]
    pub fn origin(&self) -> PxPoint {
        PxPoint::new(self.left, self.top)
    }
}
