#![forbid(unsafe_code)]

//! Focus resolver: two watchers, one winning key.
//!
//! The vertical and horizontal watchers fire independently and would
//! otherwise fight over the shared display surface. The resolver is the
//! single arbiter: it consumes their reports as pure inputs and owns the
//! only mutable [`FocusState`]. Precedence:
//!
//! - A vertical report naming a non-carousel section wins unconditionally.
//! - A vertical report naming the carousel-hosting section falls through
//!   to the latest horizontally centered card (the section has no image of
//!   its own), defaulting to the first card in document order before the
//!   horizontal watcher has ever reported.
//! - A horizontal report wins only while the carousel container actually
//!   intersects the vertical viewport; a horizontally centered but
//!   vertically off-screen card never steals focus.
//!
//! Resolution returns `Some` only when the winning key differs from the
//! current focus, so callers request at most one transition per distinct
//! focus change.

use tracing::{debug, trace};

use glide_core::key::ContentKey;

/// The single current-focus value. Mutated only by [`FocusResolver`];
/// everyone else reads through [`FocusState::current`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusState {
    current: Option<ContentKey>,
}

impl FocusState {
    /// The currently winning key, if any focus has been resolved yet.
    pub fn current(&self) -> Option<&ContentKey> {
        self.current.as_ref()
    }
}

/// Arbitrates the two watchers into one focus.
#[derive(Debug, Clone)]
pub struct FocusResolver {
    carousel_section: ContentKey,
    first_card: Option<ContentKey>,
    last_card: Option<ContentKey>,
    focus: FocusState,
}

impl FocusResolver {
    /// Create a resolver for a page whose `carousel_section` hosts cards,
    /// `first_card` being the document-order default before any horizontal
    /// report.
    pub fn new(carousel_section: ContentKey, first_card: Option<ContentKey>) -> Self {
        Self {
            carousel_section,
            first_card,
            last_card: None,
            focus: FocusState::default(),
        }
    }

    /// Read access to the focus state.
    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    /// A vertical report named `section` as the active top-level section.
    ///
    /// Returns the new focus key when the focus changed.
    pub fn on_vertical(&mut self, section: &ContentKey) -> Option<ContentKey> {
        if *section != self.carousel_section {
            return self.assign(section.clone());
        }

        // The carousel section has no image of its own: fall through to the
        // card the horizontal watcher last reported, else the first card.
        let card = self.last_card.as_ref().or(self.first_card.as_ref())?.clone();
        self.assign(card)
    }

    /// A horizontal report named `card` as the centered carousel card.
    ///
    /// `carousel_visible` is the visibility guard: whether the carousel
    /// container's bounding box currently intersects the vertical
    /// viewport. Returns the new focus key when the focus changed.
    pub fn on_horizontal(
        &mut self,
        card: &ContentKey,
        carousel_visible: bool,
    ) -> Option<ContentKey> {
        self.last_card = Some(card.clone());
        if !carousel_visible {
            trace!(card = %card, "horizontal report ignored, carousel off-screen");
            return None;
        }
        self.assign(card.clone())
    }

    fn assign(&mut self, key: ContentKey) -> Option<ContentKey> {
        if self.focus.current.as_ref() == Some(&key) {
            return None;
        }
        debug!(from = ?self.focus.current, to = %key, "focus changed");
        self.focus.current = Some(key.clone());
        Some(key)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
