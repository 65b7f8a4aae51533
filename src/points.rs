//! Snap-point derivation and the cached point set.
//!
//! Every element contributes six snap lines: its left, right, and horizontal
//! center on the x axis, and its top, bottom, and vertical center on the y
//! axis. Deriving them is cheap but happens on every drag tick, so
//! [`SnapPointCache`] keeps the last result and only recomputes when the
//! element list has changed according to its [`CachePolicy`].

#[cfg(test)]
#[path = "points_test.rs"]
mod points_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::element::{ElementId, PageElement};
use crate::geom::mm_to_px;

/// Which feature of an element's box a snap point marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapKind {
    /// Left edge (x axis).
    Left,
    /// Right edge (x axis).
    Right,
    /// Horizontal center (x axis).
    CenterX,
    /// Top edge (y axis).
    Top,
    /// Bottom edge (y axis).
    Bottom,
    /// Vertical center (y axis).
    CenterY,
}

/// The axis a snap kind compares on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl SnapKind {
    /// The axis this kind belongs to.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right | Self::CenterX => Axis::X,
            Self::Top | Self::Bottom | Self::CenterY => Axis::Y,
        }
    }
}

/// One snap line derived from one element, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapPoint {
    /// Which box feature this point marks.
    pub kind: SnapKind,
    /// Pixel coordinate of the snap line (an x for x-axis kinds, a y for y-axis kinds).
    pub value: f64,
    /// The element this point was derived from.
    pub element_id: ElementId,
}

/// Derive the six snap points of every element, in input order.
///
/// Zero elements yields an empty vector. Zero-size or negative-position
/// elements are valid input; geometry is not validated here.
#[must_use]
pub fn snap_points_for(elements: &[PageElement]) -> Vec<SnapPoint> {
    let mut points = Vec::with_capacity(elements.len() * 6);
    for e in elements {
        let left = mm_to_px(e.x);
        let right = mm_to_px(e.x + e.width);
        let center_x = left + mm_to_px(e.width) / 2.0;
        let top = mm_to_px(e.y);
        let bottom = mm_to_px(e.y + e.height);
        let center_y = top + mm_to_px(e.height) / 2.0;
        points.push(SnapPoint { kind: SnapKind::Left, value: left, element_id: e.id });
        points.push(SnapPoint { kind: SnapKind::Right, value: right, element_id: e.id });
        points.push(SnapPoint { kind: SnapKind::CenterX, value: center_x, element_id: e.id });
        points.push(SnapPoint { kind: SnapKind::Top, value: top, element_id: e.id });
        points.push(SnapPoint { kind: SnapKind::Bottom, value: bottom, element_id: e.id });
        points.push(SnapPoint { kind: SnapKind::CenterY, value: center_y, element_id: e.id });
    }
    points
}

/// When the cached snap points are considered stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Recompute only when the element-id set changes (an id added, removed,
    /// or renamed). Geometry-only changes of existing elements serve stale
    /// points until the id set next changes.
    #[default]
    IdSet,
    /// Recompute when any id or any geometry field changes.
    Geometry,
}

/// The last computed snap points plus the element snapshot they came from.
///
/// Element ids are assumed unique within one input list; the page store
/// guarantees that upstream.
pub struct SnapPointCache {
    policy: CachePolicy,
    elements: HashMap<ElementId, PageElement>,
    points: Vec<SnapPoint>,
}

impl SnapPointCache {
    /// Create an empty cache with the given freshness policy.
    #[must_use]
    pub fn new(policy: CachePolicy) -> Self {
        Self { policy, elements: HashMap::new(), points: Vec::new() }
    }

    /// The snap points for `elements`, reusing the cached set when it is
    /// still fresh under this cache's policy. A cache hit returns the same
    /// backing array as the previous call.
    pub fn points(&mut self, elements: &[PageElement]) -> &[SnapPoint] {
        if !self.is_fresh(elements) {
            self.points = snap_points_for(elements);
            self.elements = elements.iter().map(|e| (e.id, *e)).collect();
        }
        &self.points
    }

    /// Drop the snapshot so the next [`points`](Self::points) call recomputes.
    pub fn invalidate(&mut self) {
        self.elements.clear();
        self.points.clear();
    }

    /// The freshness policy this cache was built with.
    #[must_use]
    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    fn is_fresh(&self, elements: &[PageElement]) -> bool {
        if elements.len() != self.elements.len() {
            return false;
        }
        match self.policy {
            CachePolicy::IdSet => elements.iter().all(|e| self.elements.contains_key(&e.id)),
            CachePolicy::Geometry => {
                elements.iter().all(|e| self.elements.get(&e.id).is_some_and(|cached| cached == e))
            }
        }
    }
}

impl Default for SnapPointCache {
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}
