#![forbid(unsafe_code)]

//! Canonical input events.
//!
//! Everything the host environment can tell the engine, as plain data. The
//! host dispatches these from its scroll/resize/pointer/timer callbacks;
//! the engine consumes them single-threaded, in arrival order.
//!
//! # Design Notes
//!
//! - Time never flows implicitly: [`Event::Tick`] is the only way the
//!   transition machine advances, which keeps replays deterministic.
//! - Scroll events carry no element geometry; the engine re-queries the
//!   [`Layout`](crate::layout::Layout) oracle instead, mirroring how an
//!   intersection callback re-reads bounding boxes.

use std::time::Duration;

use crate::key::ContentKey;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The page scrolled vertically; `offset` is the new scroll position.
    VerticalScroll {
        /// Vertical scroll offset in pixels.
        offset: f32,
    },

    /// The carousel container scrolled horizontally.
    HorizontalScroll,

    /// The viewport was resized.
    Resize,

    /// Time advanced by `dt`.
    Tick {
        /// Elapsed time since the previous tick.
        dt: Duration,
    },

    /// The display surface finished loading its current source.
    SourceLoaded,

    /// The display surface failed to load its current source.
    SourceFailed,

    /// The pointer entered the nav entry element named by `entry`.
    NavHover {
        /// Key of the hovered nav element.
        entry: ContentKey,
    },

    /// The pointer left the navigation area.
    NavHoverEnd,

    /// The mobile drawer toggle was activated.
    MenuToggle,

    /// A drawer nav link was activated: close the drawer, then scroll.
    DrawerNavigate {
        /// Section key to scroll to.
        target: ContentKey,
    },

    /// An anchor link was activated.
    AnchorClick {
        /// Section key to scroll to.
        target: ContentKey,
    },

    /// The carousel's previous-page control was activated.
    CarouselPrev,

    /// The carousel's next-page control was activated.
    CarouselNext,

    /// The pointer moved over a card.
    PointerMove {
        /// Key of the card under the pointer.
        card: ContentKey,
        /// Pointer x in viewport coordinates.
        x: f32,
        /// Pointer y in viewport coordinates.
        y: f32,
    },
}
