//! Caching breed fetcher.

use super::stats::CacheStats;
use crate::fetcher::BreedFetcher;
use crate::Result;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use tracing::debug;

/// Bumps the source call counter when dropped, so a call is counted on
/// every exit path out of the source, unwinding included.
struct CallGuard<'a> {
    calls: &'a Cell<u64>,
}

impl CallGuard<'_> {
    fn new(calls: &Cell<u64>) -> CallGuard<'_> {
        CallGuard { calls }
    }
}

impl Drop for CallGuard<'_> {
    fn drop(&mut self) {
        self.calls.set(self.calls.get().saturating_add(1));
    }
}

/// A [`BreedFetcher`] that remembers successful lookups of the wrapped source.
///
/// - Successful results are stored and never evicted
/// - Failures (`BreedNotFound` or any other error) are returned unchanged and not stored
/// - Every call that reaches the source is counted, whatever its outcome
///
/// State is kept in `Cell`/`RefCell`, so the type is single-threaded (`!Sync`).
/// Wrap it in a `Mutex` to share it between threads.
pub struct CachingBreedFetcher<F> {
    source: F,
    cache: RefCell<HashMap<String, Vec<String>>>,
    calls: Cell<u64>,
    hits: Cell<u64>,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    pub fn new(source: F) -> Self {
        Self {
            source,
            cache: RefCell::new(HashMap::new()),
            calls: Cell::new(0),
            hits: Cell::new(0),
        }
    }

    /// Number of calls made to the underlying source so far.
    pub fn calls_made(&self) -> u64 {
        self.calls.get()
    }

    pub fn is_cached(&self, breed: &str) -> bool {
        self.cache.borrow().contains_key(breed)
    }

    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            source_calls: self.calls.get(),
            hits: self.hits.get(),
            cached_keys: self.cached_len(),
        }
    }

    pub fn source(&self) -> &F {
        &self.source
    }

    pub fn into_inner(self) -> F {
        self.source
    }
}

impl<F: BreedFetcher> BreedFetcher for CachingBreedFetcher<F> {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        if let Some(subs) = self.cache.borrow().get(breed) {
            self.hits.set(self.hits.get().saturating_add(1));
            debug!(breed, "breed cache hit");
            return Ok(subs.clone());
        }

        debug!(breed, "breed cache miss");
        let result = {
            let _guard = CallGuard::new(&self.calls);
            self.source.sub_breeds(breed)
        };

        match result {
            Ok(subs) => {
                self.cache
                    .borrow_mut()
                    .insert(breed.to_string(), subs.clone());
                debug!(breed, count = subs.len(), "cached sub-breeds");
                Ok(subs)
            }
            Err(e) => {
                debug!(breed, error = %e, "source lookup failed; not cached");
                Err(e)
            }
        }
    }
}
