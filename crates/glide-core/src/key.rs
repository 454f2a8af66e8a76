#![forbid(unsafe_code)]

//! Content keys and asset locators.
//!
//! A [`ContentKey`] ties a page element to a unit of displayable content. It
//! comes from static markup metadata, is stable for the element's lifetime,
//! and is cloned freely across components, so it wraps an `Arc<str>`.

use std::fmt;
use std::sync::Arc;

/// Opaque identifier naming a unit of displayable content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentKey(Arc<str>);

impl ContentKey {
    /// The key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ContentKey {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for ContentKey {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Locator of an image resource (a URL or path), as opaque to the engine as
/// the key that maps to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetRef(Arc<str>);

impl AssetRef {
    /// The locator as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetRef {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for AssetRef {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
