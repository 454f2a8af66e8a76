#![forbid(unsafe_code)]

//! Geometry oracle.
//!
//! The engine never measures anything itself; the host supplies element
//! geometry through [`Layout`]. In the browser that is a thin adapter over
//! `getBoundingClientRect`; in tests and the simulator it is a
//! [`StaticLayout`] holding hand-placed rectangles.
//!
//! All rectangles are in viewport coordinates: the viewport's origin is
//! `(0, 0)` and scrolled-away content has negative `y` (or `x`).

use ahash::AHashMap;

use crate::geometry::Rect;
use crate::key::ContentKey;

/// Host-supplied element geometry.
///
/// A key with no bounds (unmounted element, detached node) yields `None`;
/// callers treat that as a missing target and skip the operation.
pub trait Layout {
    /// The page viewport rectangle, origin at `(0, 0)`.
    fn viewport(&self) -> Rect;

    /// Current bounding box of the element bound to `key`, in viewport
    /// coordinates.
    fn bounds(&self, key: &ContentKey) -> Option<Rect>;
}

/// Fixed-geometry [`Layout`] for tests and simulation.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    viewport: Rect,
    bounds: AHashMap<ContentKey, Rect>,
}

impl StaticLayout {
    /// Create a layout with the given viewport.
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            bounds: AHashMap::new(),
        }
    }

    /// Place an element (builder pattern).
    #[must_use]
    pub fn with(mut self, key: impl Into<ContentKey>, rect: Rect) -> Self {
        self.place(key, rect);
        self
    }

    /// Place or move an element.
    pub fn place(&mut self, key: impl Into<ContentKey>, rect: Rect) {
        self.bounds.insert(key.into(), rect);
    }

    /// Remove an element, simulating a detached node.
    pub fn remove(&mut self, key: &ContentKey) {
        self.bounds.remove(key);
    }

    /// Replace the viewport rectangle, simulating a resize.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }
}

impl Layout for StaticLayout {
    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn bounds(&self, key: &ContentKey) -> Option<Rect> {
        self.bounds.get(key).copied()
    }
}
