#![forbid(unsafe_code)]

//! Engine tunables as data.
//!
//! Every timing and threshold the engine consults lives here rather than in
//! scattered constants, so hosts can load a TOML file at startup instead of
//! recompiling. Every field has a sensible default; a bare
//! `EngineOptions::default()` is a working configuration.
//!
//! # Loading
//!
//! ```toml
//! # glide.toml
//! vertical_band = 0.2
//! fade_out_ms = 400
//! header_offset = 70.0
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tunable parameters for the whole engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineOptions {
    /// Fraction of the viewport height forming the vertical trigger band.
    pub vertical_band: f32,

    /// Fraction of the carousel container width forming the horizontal
    /// trigger band.
    pub horizontal_band: f32,

    /// Settle delay between fade-out and source swap, in milliseconds.
    pub fade_out_ms: u64,

    /// Visual duration of the fade-in, in milliseconds.
    pub fade_in_ms: u64,

    /// Fixed header height subtracted from anchor scroll targets, in pixels.
    pub header_offset: f32,

    /// Scroll offset beyond which the navbar condenses, in pixels.
    pub navbar_threshold: f32,

    /// Bottom margin shaving the viewport for reveal checks, in pixels.
    pub reveal_margin: f32,

    /// Minimum visible fraction of a target before it reveals.
    pub reveal_min_ratio: f32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            vertical_band: 0.2,
            horizontal_band: 0.2,
            fade_out_ms: 400,
            fade_in_ms: 400,
            header_offset: 70.0,
            navbar_threshold: 50.0,
            reveal_margin: 100.0,
            reveal_min_ratio: 0.1,
        }
    }
}

impl EngineOptions {
    /// The settle delay as a [`Duration`].
    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    /// The fade-in duration as a [`Duration`].
    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }

    /// Load options from a TOML string. Missing fields keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load options from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let o = EngineOptions::default();
        assert_eq!(o.vertical_band, 0.2);
        assert_eq!(o.horizontal_band, 0.2);
        assert_eq!(o.fade_out(), Duration::from_millis(400));
        assert_eq!(o.fade_in(), Duration::from_millis(400));
        assert_eq!(o.header_offset, 70.0);
        assert_eq!(o.navbar_threshold, 50.0);
        assert_eq!(o.reveal_margin, 100.0);
        assert_eq!(o.reveal_min_ratio, 0.1);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let o = EngineOptions::from_toml_str("fade_out_ms = 250\nvertical_band = 0.3\n").unwrap();
        assert_eq!(o.fade_out(), Duration::from_millis(250));
        assert_eq!(o.vertical_band, 0.3);
        assert_eq!(o.header_offset, 70.0);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let o = EngineOptions::from_toml_str("").unwrap();
        assert_eq!(o, EngineOptions::default());
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        assert!(EngineOptions::from_toml_str("fade_out_millis = 250\n").is_err());
    }
}
