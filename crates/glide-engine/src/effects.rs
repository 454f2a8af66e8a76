#![forbid(unsafe_code)]

//! Output vocabulary.
//!
//! Components never touch the page; they append [`Effect`]s to the current
//! batch and the host executes them (class toggles, style writes, a source
//! swap, a programmatic scroll). Effects are plain data so tests assert on
//! them directly.

use glide_core::key::{AssetRef, ContentKey};

/// A visual side effect for the host to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Apply the fade-out visual state to the display surface.
    FadeOut,

    /// Swap the display surface's underlying image source.
    SetSource(AssetRef),

    /// Apply the fade-in visual state to the display surface.
    FadeIn,

    /// Position the nav indicator pill.
    Indicator {
        /// Left offset relative to the nav bar, in pixels.
        left: f32,
        /// Pill width in pixels.
        width: f32,
    },

    /// Hide the nav indicator pill.
    HideIndicator,

    /// Toggle the navbar's condensed state.
    NavbarCondensed(bool),

    /// Open or close the mobile drawer.
    DrawerOpen(bool),

    /// Lock or unlock background scrolling while the drawer is open.
    ScrollLock(bool),

    /// Reveal a deferred element (fires once per target).
    Reveal(ContentKey),

    /// Move a card's glow origin to card-local coordinates.
    GlowOrigin {
        /// Card owning the glow.
        card: ContentKey,
        /// Pointer x relative to the card's left edge.
        x: f32,
        /// Pointer y relative to the card's top edge.
        y: f32,
    },

    /// Scroll the page to an absolute vertical offset.
    ScrollTo {
        /// Target scroll offset in pixels.
        offset: f32,
    },

    /// Scroll the carousel container by a relative amount.
    ScrollCarouselBy {
        /// Signed horizontal delta in pixels.
        delta: f32,
    },
}
