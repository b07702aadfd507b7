use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single catalogue record: an advertising platform and the locations it serves.
///
/// Names are not unique. Two records with the same name are kept as two platforms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub name: String,
    pub locations: Vec<String>,
}

impl Platform {
    pub fn new(name: impl Into<String>, locations: Vec<String>) -> Self {
        Self {
            name: name.into(),
            locations,
        }
    }
}

/// One published state of the engine.
///
/// The platform list and the location index are always built together and are
/// never mutated after publication. Readers hold an `Arc<Generation>`, so an
/// older generation stays alive until its last reader drops it.
#[derive(Debug, Default)]
pub struct Generation {
    /// 0 for the empty generation installed at construction.
    pub number: u64,
    pub platforms: Vec<Platform>,
    /// Location key -> sorted, deduplicated names of eligible platforms.
    pub index: HashMap<String, Vec<String>>,
}

impl Generation {
    pub fn platform_count(&self) -> usize {
        self.platforms.len()
    }

    pub fn key_count(&self) -> usize {
        self.index.len()
    }

    pub fn lookup(&self, key: &str) -> &[String] {
        self.index.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Result of a location search, serialized as the HTTP response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// The normalized location that was looked up.
    pub location: String,
    pub platforms: Vec<String>,
}

impl SearchResult {
    pub fn empty(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            platforms: Vec::new(),
        }
    }
}
