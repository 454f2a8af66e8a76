#![forbid(unsafe_code)]

//! Reveal-on-scroll tracker.
//!
//! Deferred elements stay hidden until they scroll far enough into view,
//! then reveal exactly once. "Far enough" means the element's overlap with
//! the margin-shaved viewport covers at least the configured fraction of
//! the element; the bottom shave makes reveals start before the element
//! reaches the very edge.

use tracing::trace;

use glide_core::geometry::Rect;
use glide_core::key::ContentKey;
use glide_core::layout::Layout;

use crate::effects::Effect;

/// One-shot reveal tracker over the registered targets.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    pending: Vec<ContentKey>,
    bottom_margin: f32,
    min_ratio: f32,
}

impl RevealTracker {
    /// Track `targets`, revealing each once it is `min_ratio` visible
    /// inside the viewport shaved by `bottom_margin` pixels.
    pub fn new(targets: Vec<ContentKey>, bottom_margin: f32, min_ratio: f32) -> Self {
        Self {
            pending: targets,
            bottom_margin,
            min_ratio,
        }
    }

    /// Targets not yet revealed.
    pub fn pending(&self) -> &[ContentKey] {
        &self.pending
    }

    /// Check all pending targets against the current layout, emitting a
    /// [`Effect::Reveal`] for (and retiring) each one that qualifies.
    pub fn scan(&mut self, layout: &impl Layout, out: &mut Vec<Effect>) {
        if self.pending.is_empty() {
            return;
        }

        let vp = layout.viewport();
        let shaved = Rect::new(
            vp.x,
            vp.y,
            vp.width,
            (vp.height - self.bottom_margin).max(0.0),
        );
        let min_ratio = self.min_ratio;

        self.pending.retain(|key| {
            let Some(bounds) = layout.bounds(key) else {
                return true;
            };
            if bounds.is_empty() {
                return true;
            }
            let visible = bounds
                .intersection_opt(&shaved)
                .map_or(0.0, |i| i.area() / bounds.area());
            if visible < min_ratio {
                return true;
            }
            trace!(key = %key, "revealing");
            out.push(Effect::Reveal(key.clone()));
            false
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
