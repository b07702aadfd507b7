use super::types::{Generation, Platform, SearchResult};
use arc_swap::ArcSwap;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Location index engine.
///
/// Holds the currently published [`Generation`] behind an `ArcSwap`. Queries load
/// the current snapshot without locking; `rebuild` builds a complete replacement
/// off to the side and publishes it with a single store.
pub struct LocationIndex {
    current: ArcSwap<Generation>,
    generations: AtomicU64,
}

impl LocationIndex {
    /// Creates an engine holding the empty generation.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Replaces all platforms and the derived index with `platforms`.
    ///
    /// Never merges with the previous generation. Returns the number of accepted
    /// platform records.
    pub fn rebuild(&self, platforms: Vec<Platform>) -> usize {
        let index = build_index(&platforms);
        let number = self.generations.fetch_add(1, Ordering::Relaxed) + 1;
        let count = platforms.len();

        tracing::info!(
            "Publishing generation {}: {} platforms, {} location keys",
            number,
            count,
            index.len()
        );

        self.current.store(Arc::new(Generation {
            number,
            platforms,
            index,
        }));

        count
    }

    /// Resolves a location against the current generation.
    ///
    /// Blank input yields an empty result that echoes the input unchanged. Only
    /// locations that appeared verbatim in the loaded catalogue resolve;
    /// descendants of a registered path that were never registered themselves
    /// return nothing.
    pub fn query(&self, raw: &str) -> SearchResult {
        let Some(location) = normalize_location(raw) else {
            return SearchResult::empty(raw);
        };

        let generation = self.current.load();
        let platforms = generation.lookup(&location).to_vec();

        tracing::debug!(
            "Query {} against generation {}: {} platforms",
            location,
            generation.number,
            platforms.len()
        );

        SearchResult {
            location,
            platforms,
        }
    }

    /// Returns the currently published generation.
    pub fn snapshot(&self) -> Arc<Generation> {
        self.current.load_full()
    }
}

impl Default for LocationIndex {
    fn default() -> Self {
        Self {
            current: ArcSwap::from_pointee(Generation::default()),
            generations: AtomicU64::new(0),
        }
    }
}

/// Trims the input and forces a leading `/`. Returns `None` for blank input.
pub fn normalize_location(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with('/') {
        Some(trimmed.to_string())
    } else {
        Some(format!("/{}", trimmed))
    }
}

/// Builds the key -> eligible platforms map.
///
/// Keys are exactly the distinct locations registered by `platforms`. A platform
/// is eligible at key `L` when one of its registered locations is a string prefix
/// of `L`.
pub fn build_index(platforms: &[Platform]) -> HashMap<String, Vec<String>> {
    let keys: HashSet<&str> = platforms
        .iter()
        .flat_map(|platform| platform.locations.iter().map(String::as_str))
        .collect();

    keys.into_iter()
        .map(|key| {
            let eligible: BTreeSet<&str> = platforms
                .iter()
                .filter(|platform| {
                    platform
                        .locations
                        .iter()
                        .any(|registered| key.starts_with(registered.as_str()))
                })
                .map(|platform| platform.name.as_str())
                .collect();

            (
                key.to_string(),
                eligible.into_iter().map(str::to_string).collect(),
            )
        })
        .collect()
}
