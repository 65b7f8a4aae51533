//! Closest-alignment search, threshold policy, and snap application.
//!
//! Detection scans the snap points once and keeps, per axis, the single
//! closest candidate. The running best starts at the threshold itself and a
//! candidate must be strictly closer to take it, so a distance exactly equal
//! to the threshold never wins the search. The public [`should_snap`]
//! boundary is inclusive.

#[cfg(test)]
#[path = "align_test.rs"]
mod align_test;

use serde::{Deserialize, Serialize};

use crate::element::ElementId;
use crate::geom::PxRect;
use crate::points::{SnapKind, SnapPoint};

/// A winning x-axis candidate: applying `corrected_x` as the dragged rect's
/// left edge lands the compared feature exactly on the snap line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizontalAlignment {
    /// Which box feature matched (always an x-axis kind).
    pub kind: SnapKind,
    /// Left edge the dragged rect should move to.
    pub corrected_x: f64,
    /// Absolute pixel gap between the dragged feature and the snap line.
    pub distance: f64,
    /// The snap line's x coordinate.
    pub snap_value: f64,
    /// The element whose snap point won.
    pub element_id: ElementId,
}

/// A winning y-axis candidate; see [`HorizontalAlignment`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerticalAlignment {
    /// Which box feature matched (always a y-axis kind).
    pub kind: SnapKind,
    /// Top edge the dragged rect should move to.
    pub corrected_y: f64,
    /// Absolute pixel gap between the dragged feature and the snap line.
    pub distance: f64,
    /// The snap line's y coordinate.
    pub snap_value: f64,
    /// The element whose snap point won.
    pub element_id: ElementId,
}

/// Per-axis detection result. Axes win independently, possibly against
/// different elements in the same call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AlignmentMatch {
    /// Closest x-axis alignment under the threshold, if any.
    pub horizontal: Option<HorizontalAlignment>,
    /// Closest y-axis alignment under the threshold, if any.
    pub vertical: Option<VerticalAlignment>,
}

impl AlignmentMatch {
    /// Returns `true` if neither axis found a winner.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }
}

/// Corrected coordinates to feed back into the drag, one per snapped axis.
///
/// An absent axis means "do not override that axis"; the serialized form
/// omits the key entirely. `alignments` carries the originating match for
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SnapResult {
    /// Corrected left edge, present when the horizontal alignment snapped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Corrected top edge, present when the vertical alignment snapped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// The match this result was derived from.
    pub alignments: AlignmentMatch,
}

/// The dragged rect's x-axis feature compared against a snap point of
/// `kind`, or `None` for y-axis kinds.
fn x_feature(rect: &PxRect, kind: SnapKind) -> Option<f64> {
    match kind {
        SnapKind::Left => Some(rect.left),
        SnapKind::Right => Some(rect.right()),
        SnapKind::CenterX => Some(rect.center_x()),
        SnapKind::Top | SnapKind::Bottom | SnapKind::CenterY => None,
    }
}

/// The dragged rect's y-axis feature compared against a snap point of
/// `kind`, or `None` for x-axis kinds.
fn y_feature(rect: &PxRect, kind: SnapKind) -> Option<f64> {
    match kind {
        SnapKind::Top => Some(rect.top),
        SnapKind::Bottom => Some(rect.bottom()),
        SnapKind::CenterY => Some(rect.center_y()),
        SnapKind::Left | SnapKind::Right | SnapKind::CenterX => None,
    }
}

/// Find the closest horizontal and vertical alignments of `rect` against
/// `points`, each strictly inside `threshold_px`.
///
/// Returns `None` only when `points` is empty. With points present but no
/// winner on an axis, that slot is `None`. On a tie the first-encountered
/// point wins (iteration order over `points` is the only ordering).
#[must_use]
pub fn detect_alignment(
    rect: &PxRect,
    points: &[SnapPoint],
    threshold_px: f64,
) -> Option<AlignmentMatch> {
    if points.is_empty() {
        return None;
    }

    let mut best_x = threshold_px;
    let mut best_y = threshold_px;
    let mut result = AlignmentMatch::default();

    for p in points {
        if let Some(feature) = x_feature(rect, p.kind) {
            let distance = (feature - p.value).abs();
            if distance < best_x {
                best_x = distance;
                result.horizontal = Some(HorizontalAlignment {
                    kind: p.kind,
                    corrected_x: rect.left + (p.value - feature),
                    distance,
                    snap_value: p.value,
                    element_id: p.element_id,
                });
            }
        } else if let Some(feature) = y_feature(rect, p.kind) {
            let distance = (feature - p.value).abs();
            if distance < best_y {
                best_y = distance;
                result.vertical = Some(VerticalAlignment {
                    kind: p.kind,
                    corrected_y: rect.top + (p.value - feature),
                    distance,
                    snap_value: p.value,
                    element_id: p.element_id,
                });
            }
        }
    }

    Some(result)
}

/// Whether a gap of `distance` pixels is close enough to snap.
///
/// Inclusive at the boundary: a distance exactly at the threshold snaps
/// here, even though the candidate search rejects it.
#[must_use]
pub fn should_snap(distance: f64, threshold_px: f64) -> bool {
    distance <= threshold_px
}

/// Turn a detection result into corrected coordinates.
///
/// Each axis is emitted only when its alignment exists and its distance
/// passes [`should_snap`]. Pure: nothing is mutated and the caller decides
/// how to merge the coordinates into the next rendered position.
#[must_use]
pub fn apply_snap(alignments: Option<&AlignmentMatch>, threshold_px: f64) -> SnapResult {
    let Some(m) = alignments else {
        return SnapResult::default();
    };
    SnapResult {
        x: m.horizontal.filter(|a| should_snap(a.distance, threshold_px)).map(|a| a.corrected_x),
        y: m.vertical.filter(|a| should_snap(a.distance, threshold_px)).map(|a| a.corrected_y),
        alignments: *m,
    }
}
