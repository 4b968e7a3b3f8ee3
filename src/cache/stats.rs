//! Cache statistics.

use serde::Serialize;

/// Point-in-time counters of a [`super::CachingBreedFetcher`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Calls that reached the underlying source, successful or not.
    pub source_calls: u64,
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Breeds currently cached.
    pub cached_keys: usize,
}

impl CacheStats {
    /// Lookups handled in total.
    pub fn lookups(&self) -> u64 {
        self.hits.saturating_add(self.source_calls)
    }

    pub fn hit_ratio(&self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
