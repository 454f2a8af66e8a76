#![forbid(unsafe_code)]

//! Scroll-reactive focus tracking and image synchronization.
//!
//! Two viewport watchers (vertical page sections, horizontal carousel
//! cards) feed a focus resolver that arbitrates them into a single
//! content key; a transition controller cross-fades the shared display
//! surface to match, and a nav indicator positioner follows the active
//! section in parallel. The [`Engine`] facade wires it all to host
//! events.
//!
//! Everything is headless and tick-driven: hosts push
//! [`Event`](glide_core::Event)s and execute the returned
//! [`Effect`]s.

pub mod chrome;
pub mod effects;
pub mod engine;
pub mod glow;
pub mod indicator;
pub mod resolver;
pub mod reveal;
pub mod scrolling;
pub mod transition;
pub mod watcher;

pub use chrome::Chrome;
pub use effects::Effect;
pub use engine::Engine;
pub use indicator::NavIndicator;
pub use resolver::{FocusResolver, FocusState};
pub use reveal::RevealTracker;
pub use transition::{TransitionController, TransitionPhase, TransitionState};
pub use watcher::{IntersectionReport, ViewportWatcher};
