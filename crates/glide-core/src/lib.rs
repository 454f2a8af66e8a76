#![forbid(unsafe_code)]

//! Foundation types for the scrollglide engine.
//!
//! This crate holds everything the behavioral crates share but none of the
//! behavior itself: pixel geometry and central-band math, content keys, the
//! static page model, the key→asset table, engine tunables, the host
//! geometry oracle, and the canonical input events.

pub mod assets;
pub mod error;
pub mod event;
pub mod geometry;
pub mod key;
pub mod layout;
pub mod model;
pub mod options;

pub use assets::AssetMap;
pub use error::ConfigError;
pub use event::Event;
pub use geometry::{Axis, Band, Rect};
pub use key::{AssetRef, ContentKey};
pub use layout::{Layout, StaticLayout};
pub use model::{CarouselModel, NavEntry, PageModel};
pub use options::EngineOptions;
