#![forbid(unsafe_code)]

//! Key→asset lookup table.
//!
//! Static configuration mapping a [`ContentKey`] to the image resource it
//! displays. Keys without an entry fall back to the designated default
//! key's asset, so a sparsely mapped page still always has something to
//! show.
//!
//! # Loading
//!
//! ```toml
//! # glide-assets.toml
//! default = "hero"
//!
//! [assets]
//! hero = "https://example.test/portrait.jpg"
//! project1 = "https://example.test/p1.jpg"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use ahash::AHashMap;
use serde::Deserialize;

use crate::error::Result;
use crate::key::{AssetRef, ContentKey};

/// Key→asset table with a default-key fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetMap {
    assets: AHashMap<ContentKey, AssetRef>,
    default_key: ContentKey,
}

impl AssetMap {
    /// Create an empty table whose unmapped lookups fall back to
    /// `default_key`'s asset.
    pub fn new(default_key: impl Into<ContentKey>) -> Self {
        Self {
            assets: AHashMap::new(),
            default_key: default_key.into(),
        }
    }

    /// Map `key` to `asset` (builder pattern).
    #[must_use]
    pub fn with(mut self, key: impl Into<ContentKey>, asset: impl Into<AssetRef>) -> Self {
        self.insert(key, asset);
        self
    }

    /// Map `key` to `asset`.
    pub fn insert(&mut self, key: impl Into<ContentKey>, asset: impl Into<AssetRef>) {
        self.assets.insert(key.into(), asset.into());
    }

    /// The designated default key.
    pub fn default_key(&self) -> &ContentKey {
        &self.default_key
    }

    /// Resolve `key` to its asset, falling back to the default key's asset.
    ///
    /// Returns `None` only when neither `key` nor the default key is mapped.
    pub fn resolve(&self, key: &ContentKey) -> Option<&AssetRef> {
        self.assets
            .get(key)
            .or_else(|| self.assets.get(&self.default_key))
    }

    /// Whether `key` has a direct mapping (no fallback considered).
    pub fn contains(&self, key: &ContentKey) -> bool {
        self.assets.contains_key(key)
    }

    /// Number of direct mappings.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the table has no direct mappings.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Load the table from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let raw: RawAssetMap = toml::from_str(s)?;
        Ok(raw.into())
    }

    /// Load the table from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// On-disk shape of the table. A `BTreeMap` keeps deserialization order
/// deterministic before the entries move into the hash table.
#[derive(Debug, Deserialize)]
struct RawAssetMap {
    default: String,
    #[serde(default)]
    assets: BTreeMap<String, String>,
}

impl From<RawAssetMap> for AssetMap {
    fn from(raw: RawAssetMap) -> Self {
        let mut map = AssetMap::new(raw.default);
        for (key, asset) in raw.assets {
            map.insert(key, asset);
        }
        map
    }
}
