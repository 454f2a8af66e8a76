#![forbid(unsafe_code)]

//! Viewport watcher: which watched elements sit in a container's central
//! trigger band.
//!
//! A watcher wraps the visibility primitive the rest of the subsystem is
//! built on. It is configured once (axis, band fraction, optional root
//! container, watched keys in document order) and then queried: `scan`
//! reads current geometry from the [`Layout`] oracle and reports the
//! watched elements overlapping the band. It emits nothing, owns no
//! content-swap logic, and carries no per-scan state, so two instances can
//! watch the same page without coordination.
//!
//! # Invariants
//!
//! 1. Hits are reported in registration (document) order.
//! 2. The primary hit is the element with the greatest band overlap,
//!    earliest-registered on ties.
//! 3. Zero hits ⇒ no report (`None`), never an empty report.
//! 4. Watched keys with no layout bounds are skipped silently.
//! 5. `scan` is pure: same layout in, same report out.

use glide_core::geometry::{Axis, Band, Rect};
use glide_core::key::ContentKey;
use glide_core::layout::Layout;

/// One scan's intersection result.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionReport {
    hits: Vec<ContentKey>,
    primary: ContentKey,
}

impl IntersectionReport {
    /// All watched keys overlapping the band, in document order.
    pub fn hits(&self) -> &[ContentKey] {
        &self.hits
    }

    /// The winning key: greatest band overlap, ties to document order.
    pub fn primary(&self) -> &ContentKey {
        &self.primary
    }
}

/// Reports watched elements intersecting a container's central band.
#[derive(Debug, Clone)]
pub struct ViewportWatcher {
    axis: Axis,
    band_fraction: f32,
    root: Option<ContentKey>,
    watched: Vec<ContentKey>,
}

impl ViewportWatcher {
    /// Create a watcher over the page viewport.
    pub fn new(axis: Axis, band_fraction: f32) -> Self {
        Self {
            axis,
            band_fraction,
            root: None,
            watched: Vec::new(),
        }
    }

    /// Root the watcher at a scrollable container instead of the viewport
    /// (builder pattern).
    #[must_use]
    pub fn root(mut self, container: impl Into<ContentKey>) -> Self {
        self.root = Some(container.into());
        self
    }

    /// Register the watched keys, in document order (builder pattern).
    /// Registration happens once at startup and is never mutated.
    #[must_use]
    pub fn observe(mut self, keys: Vec<ContentKey>) -> Self {
        self.watched = keys;
        self
    }

    /// The watcher's scroll axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Registered keys in document order.
    pub fn watched(&self) -> &[ContentKey] {
        &self.watched
    }

    /// Resolve the container rectangle: the root element's bounds when
    /// rooted, the page viewport otherwise.
    pub fn container(&self, layout: &impl Layout) -> Option<Rect> {
        match &self.root {
            Some(key) => layout.bounds(key),
            None => Some(layout.viewport()),
        }
    }

    /// Report the watched elements currently overlapping the central band.
    ///
    /// Returns `None` when nothing intersects (mid-scroll between
    /// elements) or when a rooted container has no bounds; consumers
    /// retain their last known state in both cases.
    pub fn scan(&self, layout: &impl Layout) -> Option<IntersectionReport> {
        let container = self.container(layout)?;
        let band = Band::of(&container, self.axis, self.band_fraction);

        let mut hits = Vec::new();
        let mut primary: Option<(ContentKey, f32)> = None;

        for key in &self.watched {
            let Some(bounds) = layout.bounds(key) else {
                continue;
            };
            let (start, end) = bounds.span(self.axis);
            if !band.overlaps(start, end) {
                continue;
            }

            let overlap = band.overlap_len(start, end);
            // Strict comparison keeps the earliest-registered winner on ties.
            if primary.as_ref().is_none_or(|(_, best)| overlap > *best) {
                primary = Some((key.clone(), overlap));
            }
            hits.push(key.clone());
        }

        let (primary, _) = primary?;
        Some(IntersectionReport { hits, primary })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use glide_core::layout::StaticLayout;
    use proptest::prelude::*;

    use super::*;

    fn vertical_fixture() -> (ViewportWatcher, StaticLayout) {
        let watcher = ViewportWatcher::new(Axis::Vertical, 0.2)
            .observe(vec!["hero".into(), "projects".into(), "contact".into()]);
        // 800px viewport; band is [320, 480].
        let layout = StaticLayout::new(Rect::from_size(1000.0, 800.0))
            .with("hero", Rect::new(0.0, 0.0, 1000.0, 800.0))
            .with("projects", Rect::new(0.0, 800.0, 1000.0, 800.0))
            .with("contact", Rect::new(0.0, 1600.0, 1000.0, 800.0));
        (watcher, layout)
    }

    // ---- scan -------------------------------------------------------------

    #[test]
    fn section_covering_band_is_primary() {
        let (watcher, layout) = vertical_fixture();
        let report = watcher.scan(&layout).unwrap();
        assert_eq!(report.primary(), &ContentKey::from("hero"));
        assert_eq!(report.hits(), &[ContentKey::from("hero")]);
    }

    #[test]
    fn greatest_overlap_wins_between_straddling_sections() {
        let (watcher, mut layout) = vertical_fixture();
        // Scrolled so hero covers [ -500, 300 ] and projects [ 300, 1100 ]:
        // hero misses the band entirely, projects covers it.
        layout.place("hero", Rect::new(0.0, -500.0, 1000.0, 800.0));
        layout.place("projects", Rect::new(0.0, 300.0, 1000.0, 800.0));
        layout.place("contact", Rect::new(0.0, 1100.0, 1000.0, 800.0));
        let report = watcher.scan(&layout).unwrap();
        assert_eq!(report.primary(), &ContentKey::from("projects"));
    }

    #[test]
    fn partial_overlaps_rank_by_length() {
        let (watcher, mut layout) = vertical_fixture();
        // hero ends at 400 (band overlap 80), projects starts at 400
        // (band overlap 80): tie goes to hero, registered first.
        layout.place("hero", Rect::new(0.0, -400.0, 1000.0, 800.0));
        layout.place("projects", Rect::new(0.0, 400.0, 1000.0, 800.0));
        let report = watcher.scan(&layout).unwrap();
        assert_eq!(report.hits().len(), 2);
        assert_eq!(report.primary(), &ContentKey::from("hero"));
    }

    #[test]
    fn no_intersection_emits_no_report() {
        let (watcher, mut layout) = vertical_fixture();
        // Everything pushed below the band.
        layout.place("hero", Rect::new(0.0, 481.0, 1000.0, 100.0));
        layout.place("projects", Rect::new(0.0, 600.0, 1000.0, 100.0));
        layout.place("contact", Rect::new(0.0, 700.0, 1000.0, 100.0));
        assert!(watcher.scan(&layout).is_none());
    }

    #[test]
    fn unbounded_keys_are_skipped() {
        let (watcher, mut layout) = vertical_fixture();
        layout.remove(&"hero".into());
        // Band now empty of hero; projects is off-band; no report.
        assert!(watcher.scan(&layout).is_none());
    }

    #[test]
    fn rooted_watcher_without_container_bounds_skips_scan() {
        let watcher = ViewportWatcher::new(Axis::Horizontal, 0.2)
            .root("carousel")
            .observe(vec!["p1".into()]);
        let layout = StaticLayout::new(Rect::from_size(1000.0, 800.0))
            .with("p1", Rect::new(0.0, 0.0, 400.0, 400.0));
        assert!(watcher.scan(&layout).is_none());
    }

    #[test]
    fn horizontal_scan_ignores_vertical_position() {
        // The carousel container may be vertically off-screen; the
        // horizontal watcher still reports band hits. Arbitration against
        // the vertical viewport is the resolver's job, not the watcher's.
        let watcher = ViewportWatcher::new(Axis::Horizontal, 0.2)
            .root("carousel")
            .observe(vec!["p1".into(), "p2".into()]);
        let layout = StaticLayout::new(Rect::from_size(1000.0, 800.0))
            .with("carousel", Rect::new(100.0, 2000.0, 800.0, 400.0))
            .with("p1", Rect::new(-200.0, 2000.0, 400.0, 400.0))
            .with("p2", Rect::new(300.0, 2000.0, 400.0, 400.0));
        let report = watcher.scan(&layout).unwrap();
        assert_eq!(report.primary(), &ContentKey::from("p2"));
    }

    #[test]
    fn degenerate_band_picks_first_hit_in_document_order() {
        let watcher = ViewportWatcher::new(Axis::Vertical, 0.0)
            .observe(vec!["a".into(), "b".into()]);
        // Both span the 400px center line; zero overlap length for both.
        let layout = StaticLayout::new(Rect::from_size(1000.0, 800.0))
            .with("a", Rect::new(0.0, 300.0, 1000.0, 200.0))
            .with("b", Rect::new(0.0, 350.0, 1000.0, 200.0));
        let report = watcher.scan(&layout).unwrap();
        assert_eq!(report.primary(), &ContentKey::from("a"));
        assert_eq!(report.hits().len(), 2);
    }

    // ---- properties -------------------------------------------------------

    proptest! {
        #[test]
        fn scan_is_deterministic(
            ys in proptest::collection::vec(-2000.0f32..2000.0, 1..8),
            fraction in 0.0f32..1.0,
        ) {
            let keys: Vec<ContentKey> =
                (0..ys.len()).map(|i| ContentKey::from(format!("s{i}"))).collect();
            let watcher = ViewportWatcher::new(Axis::Vertical, fraction)
                .observe(keys.clone());
            let mut layout = StaticLayout::new(Rect::from_size(1000.0, 800.0));
            for (key, y) in keys.iter().zip(&ys) {
                layout.place(key.clone(), Rect::new(0.0, *y, 1000.0, 600.0));
            }
            prop_assert_eq!(watcher.scan(&layout), watcher.scan(&layout));
        }

        #[test]
        fn primary_is_always_a_hit(
            ys in proptest::collection::vec(-2000.0f32..2000.0, 1..8),
            fraction in 0.0f32..1.0,
        ) {
            let keys: Vec<ContentKey> =
                (0..ys.len()).map(|i| ContentKey::from(format!("s{i}"))).collect();
            let watcher = ViewportWatcher::new(Axis::Vertical, fraction)
                .observe(keys.clone());
            let mut layout = StaticLayout::new(Rect::from_size(1000.0, 800.0));
            for (key, y) in keys.iter().zip(&ys) {
                layout.place(key.clone(), Rect::new(0.0, *y, 1000.0, 600.0));
            }
            if let Some(report) = watcher.scan(&layout) {
                prop_assert!(report.hits().contains(report.primary()));
                prop_assert!(!report.hits().is_empty());
            }
        }
    }
}
