//! Guide-line descriptors derived from winning alignments.
//!
//! A guide crosses the alignment's axis: an x-axis (horizontal) alignment is
//! drawn as a vertical line at the snapped x, and a y-axis (vertical)
//! alignment as a horizontal line at the snapped y. The engine owns the
//! currently-visible set; this module only derives descriptors.

#[cfg(test)]
#[path = "guides_test.rs"]
mod guides_test;

use serde::{Deserialize, Serialize};

use crate::align::AlignmentMatch;
use crate::element::ElementId;

/// Which way a guide line runs on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideOrientation {
    /// A horizontal line at a fixed y.
    Horizontal,
    /// A vertical line at a fixed x.
    Vertical,
}

/// A render descriptor for one alignment guide line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapGuide {
    /// Which way the line runs.
    pub orientation: GuideOrientation,
    /// The fixed coordinate of the line (an x for vertical, a y for horizontal).
    pub position: f64,
    /// Whether the renderer should currently draw the line.
    pub visible: bool,
    /// The element the dragged rect aligned with.
    pub element_id: ElementId,
}

/// Derive the zero, one, or two guides for a detection result.
#[must_use]
pub fn guides_for(alignments: &AlignmentMatch) -> Vec<SnapGuide> {
    let mut guides = Vec::new();
    if let Some(h) = alignments.horizontal {
        guides.push(SnapGuide {
            orientation: GuideOrientation::Vertical,
            position: h.snap_value,
            visible: true,
            element_id: h.element_id,
        });
    }
    if let Some(v) = alignments.vertical {
        guides.push(SnapGuide {
            orientation: GuideOrientation::Horizontal,
            position: v.snap_value,
            visible: true,
            element_id: v.element_id,
        });
    }
    guides
}
