//! Snap and alignment engine for the Ithaka page editor.
//!
//! Pages are authored in millimeters; the drag surface works in pixels. While
//! the user drags an element, the host editor feeds the engine the page's
//! element list and the live pixel box of the dragged element once per tick,
//! and gets back corrected coordinates plus guide-line descriptors. The host
//! owns rendering, persistence, and the event loop; this crate is pure
//! computation plus a little per-session state (the snap-point cache and the
//! visible guide list), so it runs identically under WebAssembly in the
//! browser and natively in tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Per-session [`engine::SnapEngine`] and the per-tick composite operation |
//! | [`points`] | Snap-point derivation and the cached point set |
//! | [`align`] | Closest-alignment search, threshold policy, snap application |
//! | [`guides`] | Guide-line descriptors derived from winning alignments |
//! | [`element`] | Page element geometry as supplied by the editor's page store |
//! | [`geom`] | Pixel-space points/rects and mm/px conversion |
//! | [`drag`] | Pointer-delta tracking with frame coalescing and grid snapping |
//! | [`debounce`] | Trailing-edge debouncer driven by host timestamps |
//! | [`consts`] | Shared numeric constants (threshold, debounce delay, unit factor) |

pub mod align;
pub mod consts;
pub mod debounce;
pub mod drag;
pub mod element;
pub mod engine;
pub mod geom;
pub mod guides;
pub mod points;
