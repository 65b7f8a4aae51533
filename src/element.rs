//! Page element geometry as supplied by the editor's page store.
//!
//! The engine never owns or mutates elements; it receives the current page's
//! element list on every call and derives snap points from it. Positions and
//! sizes arrive in millimeters and are converted on use.

#[cfg(test)]
#[path = "element_test.rs"]
mod element_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::{PxRect, mm_to_px};

/// Unique identifier for a page element.
pub type ElementId = Uuid;

/// A rectangular element placed on a page, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageElement {
    /// Unique identifier for this element.
    pub id: ElementId,
    /// Left edge of the bounding box in millimeters.
    pub x: f64,
    /// Top edge of the bounding box in millimeters.
    pub y: f64,
    /// Width of the bounding box in millimeters.
    pub width: f64,
    /// Height of the bounding box in millimeters.
    pub height: f64,
}

impl PageElement {
    /// The element's bounding box converted to pixel space.
    #[must_use]
    pub fn bounds_px(&self) -> PxRect {
        PxRect::new(
            mm_to_px(self.x),
            mm_to_px(self.y),
            mm_to_px(self.width),
            mm_to_px(self.height),
        )
    }
}
