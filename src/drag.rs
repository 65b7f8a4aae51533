//! Pointer-delta tracking with frame coalescing and grid snapping.
//!
//! [`DragTracker`] turns raw pointer events into candidate element
//! positions, one gesture at a time. The host calls [`DragTracker::move_to`]
//! for every pointer event and [`DragTracker::sample`] once per animation
//! frame; moves between samples coalesce into a single update. The tracker
//! never talks to the snap engine. The host builds a [`PxRect`](crate::geom::PxRect) from the
//! sampled position and the element's size, feeds that to
//! [`crate::engine::SnapEngine::detect_and_apply_snap`], and merges the
//! result.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::element::ElementId;
use crate::geom::PxPoint;

/// A candidate position for the dragged element, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    /// The element being dragged.
    pub element_id: ElementId,
    /// Candidate top-left corner, grid-snapped when a grid is configured.
    pub position: PxPoint,
}

/// The active gesture, if any.
#[derive(Debug, Clone, Default)]
enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A drag between `begin` and `end`/`cancel`.
    Dragging {
        /// The element being dragged.
        element_id: ElementId,
        /// Pointer position minus element origin at grab time; subtracting
        /// it from the live pointer recovers the candidate origin.
        grab_offset: PxPoint,
        /// Latest pointer position.
        pointer: PxPoint,
        /// Whether any move event arrived since `begin`.
        moved: bool,
        /// Whether a move event arrived since the last `sample`.
        dirty: bool,
    },
}

/// Snap a coordinate to the nearest grid line. A non-positive step leaves
/// the value unchanged.
#[must_use]
pub fn snap_to_grid(value: f64, step_px: f64) -> f64 {
    if step_px <= 0.0 {
        return value;
    }
    (value / step_px).round() * step_px
}

fn apply_grid(position: PxPoint, grid_step_px: Option<f64>) -> PxPoint {
    match grid_step_px {
        Some(step) => PxPoint::new(snap_to_grid(position.x, step), snap_to_grid(position.y, step)),
        None => position,
    }
}

/// Tracks one drag gesture and produces frame-coalesced position updates.
pub struct DragTracker {
    grid_step_px: Option<f64>,
    state: DragState,
}

impl DragTracker {
    /// Create a tracker with free (ungridded) positioning.
    #[must_use]
    pub fn new() -> Self {
        Self { grid_step_px: None, state: DragState::Idle }
    }

    /// Create a tracker that rounds candidate positions to a pixel grid.
    #[must_use]
    pub fn with_grid(step_px: f64) -> Self {
        Self { grid_step_px: Some(step_px), state: DragState::Idle }
    }

    /// Start a gesture on `element_id`, whose top-left is at `origin` while
    /// the pointer is at `pointer`. Replaces any gesture in progress.
    pub fn begin(&mut self, element_id: ElementId, origin: PxPoint, pointer: PxPoint) {
        self.state = DragState::Dragging {
            element_id,
            grab_offset: PxPoint::new(pointer.x - origin.x, pointer.y - origin.y),
            pointer,
            moved: false,
            dirty: false,
        };
    }

    /// Record the latest pointer position. Ignored while idle.
    pub fn move_to(&mut self, pointer: PxPoint) {
        if let DragState::Dragging { pointer: latest, moved, dirty, .. } = &mut self.state {
            *latest = pointer;
            *moved = true;
            *dirty = true;
        }
    }

    /// The candidate position for this frame, coalescing every move since
    /// the previous sample. `None` when idle or nothing moved since then.
    pub fn sample(&mut self) -> Option<DragUpdate> {
        let grid = self.grid_step_px;
        let DragState::Dragging { element_id, grab_offset, pointer, dirty, .. } = &mut self.state
        else {
            return None;
        };
        if !*dirty {
            return None;
        }
        *dirty = false;
        let raw = PxPoint::new(pointer.x - grab_offset.x, pointer.y - grab_offset.y);
        Some(DragUpdate { element_id: *element_id, position: apply_grid(raw, grid) })
    }

    /// Finish the gesture. Returns the final position if the pointer ever
    /// moved; a click without movement produces no update.
    pub fn end(&mut self) -> Option<DragUpdate> {
        let grid = self.grid_step_px;
        match std::mem::take(&mut self.state) {
            DragState::Dragging { element_id, grab_offset, pointer, moved: true, .. } => {
                let raw = PxPoint::new(pointer.x - grab_offset.x, pointer.y - grab_offset.y);
                Some(DragUpdate { element_id, position: apply_grid(raw, grid) })
            }
            DragState::Dragging { .. } | DragState::Idle => None,
        }
    }

    /// Abandon the gesture with no final update.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The element under drag, if a gesture is in progress.
    #[must_use]
    pub fn dragging_id(&self) -> Option<ElementId> {
        match &self.state {
            DragState::Dragging { element_id, .. } => Some(*element_id),
            DragState::Idle => None,
        }
    }

    /// The configured grid step, if any.
    #[must_use]
    pub fn grid_step_px(&self) -> Option<f64> {
        self.grid_step_px
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}
