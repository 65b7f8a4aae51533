//! Per-session snap engine and the per-tick composite operation.
//!
//! One [`SnapEngine`] serves one editor session; multiple open documents get
//! independent engines with independent caches and guide lists. The host
//! calls [`SnapEngine::detect_and_apply_snap`] once per drag-move tick and
//! reads [`SnapEngine::guides`] when rendering; every sub-operation is also
//! exposed on its own so callers can compose or test the stages separately.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::align::{self, AlignmentMatch, SnapResult};
use crate::consts::SNAP_THRESHOLD_PX;
use crate::element::PageElement;
use crate::geom::PxRect;
use crate::guides::{self, SnapGuide};
use crate::points::{CachePolicy, SnapPoint, SnapPointCache};

/// Tunables for one engine instance.
#[derive(Debug, Clone, Copy)]
pub struct SnapConfig {
    /// Maximum distance in pixels at which an alignment can win.
    pub threshold_px: f64,
    /// When the snap-point cache recomputes.
    pub cache_policy: CachePolicy,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self { threshold_px: SNAP_THRESHOLD_PX, cache_policy: CachePolicy::IdSet }
    }
}

/// Snap state for one editor session: the point cache and the guide list.
pub struct SnapEngine {
    config: SnapConfig,
    cache: SnapPointCache,
    guides: Vec<SnapGuide>,
}

impl Default for SnapEngine {
    fn default() -> Self {
        Self::with_config(SnapConfig::default())
    }
}

impl SnapEngine {
    /// Create an engine with the default threshold and cache policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with explicit tunables.
    #[must_use]
    pub fn with_config(config: SnapConfig) -> Self {
        Self {
            config,
            cache: SnapPointCache::new(config.cache_policy),
            guides: Vec::new(),
        }
    }

    /// The tunables this engine was built with.
    #[must_use]
    pub fn config(&self) -> SnapConfig {
        self.config
    }

    // --- Snap points ---

    /// The snap points for the current element list, cached per the
    /// configured [`CachePolicy`]. A cache hit returns the same backing
    /// array as the previous call.
    pub fn snap_points(&mut self, elements: &[PageElement]) -> &[SnapPoint] {
        self.cache.points(elements)
    }

    /// Force the next [`snap_points`](Self::snap_points) call to recompute.
    pub fn invalidate_cache(&mut self) {
        self.cache.invalidate();
    }

    // --- Detection and application ---

    /// Closest per-axis alignments of `rect` against `points`, using this
    /// engine's threshold. `None` only when `points` is empty.
    #[must_use]
    pub fn detect_alignment(&self, rect: &PxRect, points: &[SnapPoint]) -> Option<AlignmentMatch> {
        align::detect_alignment(rect, points, self.config.threshold_px)
    }

    /// Whether a gap of `distance` pixels snaps under this engine's
    /// threshold (inclusive).
    #[must_use]
    pub fn should_snap(&self, distance: f64) -> bool {
        align::should_snap(distance, self.config.threshold_px)
    }

    /// Corrected coordinates for a detection result, one per passing axis.
    #[must_use]
    pub fn apply_snap(&self, alignments: Option<&AlignmentMatch>) -> SnapResult {
        align::apply_snap(alignments, self.config.threshold_px)
    }

    // --- Guides ---

    /// Replace the visible guide set with the guides for `alignments`.
    /// An absent or empty match clears the set; guides never accumulate
    /// across calls.
    pub fn generate_guides(&mut self, alignments: Option<&AlignmentMatch>) {
        self.guides = match alignments {
            Some(m) => guides::guides_for(m),
            None => Vec::new(),
        };
    }

    /// The currently-visible guides.
    #[must_use]
    pub fn guides(&self) -> &[SnapGuide] {
        &self.guides
    }

    /// Empty the guide set. Call when a drag ends or is cancelled,
    /// otherwise stale guides remain visible.
    pub fn clear_guides(&mut self) {
        self.guides.clear();
    }

    // --- Composite ---

    /// The per-drag-tick pipeline: derive snap points (cached), detect the
    /// closest alignments, replace the guide set, and return the corrected
    /// coordinates.
    pub fn detect_and_apply_snap(
        &mut self,
        rect: &PxRect,
        elements: &[PageElement],
    ) -> SnapResult {
        let threshold = self.config.threshold_px;
        let alignments = align::detect_alignment(rect, self.cache.points(elements), threshold);
        self.generate_guides(alignments.as_ref());
        align::apply_snap(alignments.as_ref(), threshold)
    }
}
