#![forbid(unsafe_code)]

//! Configuration error model.
//!
//! Loading the asset table or the engine options is the only fallible
//! surface of the crate. Everything downstream of configuration absorbs
//! failures locally (missing targets are skipped, load failures degrade),
//! so a single domain error covers the whole system.

use std::fmt;

/// Failure while loading configuration from disk or parsing TOML.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O failure reading a configuration file.
    Io(std::io::Error),
    /// The TOML document did not match the expected shape.
    Parse(toml::de::Error),
}

/// Standard result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "config I/O: {err}"),
            Self::Parse(err) => write!(f, "config parse: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err)
    }
}
