//! Shared numeric constants for the snap engine.

// ── Units ───────────────────────────────────────────────────────

/// Millimeters to CSS pixels at 96 DPI (1 in = 25.4 mm = 96 px).
pub const MM_TO_PX: f64 = 3.779_527_559_1;

// ── Snapping ────────────────────────────────────────────────────

/// Maximum distance in pixels at which an alignment candidate can win.
pub const SNAP_THRESHOLD_PX: f64 = 10.0;

/// Default trailing-edge delay for debounced detection, in milliseconds.
pub const SNAP_DEBOUNCE_MS: f64 = 50.0;

// ── Dragging ────────────────────────────────────────────────────

/// Default grid pitch in pixels for grid-aligned dragging.
pub const GRID_STEP_PX: f64 = 20.0;
