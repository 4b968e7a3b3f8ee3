//! Integration tests for the caching breed fetcher.

use breed_cache::{BreedFetcher, CachingBreedFetcher, Error, ErrorContext, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};

/// Test double that answers from a map and records every key it is asked for.
struct RecordingFetcher {
    breeds: HashMap<String, Vec<String>>,
    requests: RefCell<Vec<String>>,
}

impl RecordingFetcher {
    fn new(entries: &[(&str, &[&str])]) -> Self {
        Self {
            breeds: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
                .collect(),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl BreedFetcher for RecordingFetcher {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        self.requests.borrow_mut().push(breed.to_string());
        self.breeds
            .get(breed)
            .cloned()
            .ok_or_else(|| Error::not_found(breed))
    }
}

/// Fails with a transport-style error for the first `failures` calls, then succeeds.
struct FlakyFetcher {
    failures: Cell<u32>,
}

impl BreedFetcher for FlakyFetcher {
    fn sub_breeds(&self, _breed: &str) -> Result<Vec<String>> {
        let left = self.failures.get();
        if left > 0 {
            self.failures.set(left - 1);
            return Err(Error::source_with_context(
                "connection reset by peer",
                ErrorContext::new().with_source("flaky"),
            ));
        }
        Ok(vec!["recovered".to_string()])
    }
}

struct PanickingFetcher;

impl BreedFetcher for PanickingFetcher {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        panic!("source exploded on {breed}");
    }
}

#[test]
fn test_cache_hit_avoids_source_call() {
    let source = RecordingFetcher::new(&[("hound", &["afghan", "basset"])]);
    let cache = CachingBreedFetcher::new(source);

    let first = cache.sub_breeds("hound").unwrap();
    let second = cache.sub_breeds("hound").unwrap();

    assert_eq!(first, second);
    assert_eq!(cache.calls_made(), 1);
    assert_eq!(cache.source().requests(), vec!["hound"]);
}

#[test]
fn test_miss_then_hit_sequencing() {
    let cache = CachingBreedFetcher::new(RecordingFetcher::new(&[("husky", &["example"])]));
    assert_eq!(cache.calls_made(), 0);

    assert_eq!(cache.sub_breeds("husky").unwrap(), vec!["example"]);
    assert_eq!(cache.calls_made(), 1);

    assert_eq!(cache.sub_breeds("husky").unwrap(), vec!["example"]);
    assert_eq!(cache.calls_made(), 1);
}

#[test]
fn test_failed_lookups_are_never_cached() {
    let cache = CachingBreedFetcher::new(RecordingFetcher::new(&[]));

    for expected_calls in 1..=2 {
        let err = cache.sub_breeds("unknown").unwrap_err();
        assert!(err.is_not_found(), "unexpected error: {err}");
        assert_eq!(cache.calls_made(), expected_calls);
    }
    assert!(!cache.is_cached("unknown"));
    assert_eq!(cache.source().requests(), vec!["unknown", "unknown"]);
}

#[test]
fn test_independent_keys_tracked_independently() {
    let source = RecordingFetcher::new(&[("a", &["a1"]), ("b", &["b1", "b2"])]);
    let cache = CachingBreedFetcher::new(source);

    assert_eq!(cache.sub_breeds("a").unwrap(), vec!["a1"]);
    assert_eq!(cache.sub_breeds("b").unwrap(), vec!["b1", "b2"]);
    assert_eq!(cache.calls_made(), 2);

    assert_eq!(cache.sub_breeds("b").unwrap(), vec!["b1", "b2"]);
    assert_eq!(cache.sub_breeds("a").unwrap(), vec!["a1"]);
    assert_eq!(cache.calls_made(), 2);
}

#[test]
fn test_counter_counts_source_invocations_only() {
    let cache = CachingBreedFetcher::new(RecordingFetcher::new(&[("husky", &["example"])]));

    let keys = ["husky", "husky", "cat", "husky", "cat", "husky"];
    for key in keys {
        let _ = cache.sub_breeds(key);
    }

    // One successful miss for husky, then two failed misses for cat.
    assert_eq!(cache.calls_made(), 3);
    assert_eq!(cache.calls_made() as usize, cache.source().requests().len());
    assert_eq!(cache.stats().hits, 3);
}

#[test]
fn test_no_eviction() {
    const SUBS: &[&str] = &["sub"];
    let names: Vec<String> = (0..500).map(|i| format!("breed-{i}")).collect();
    let entries: Vec<(&str, &[&str])> = names.iter().map(|n| (n.as_str(), SUBS)).collect();
    let cache = CachingBreedFetcher::new(RecordingFetcher::new(&entries));

    for name in &names {
        cache.sub_breeds(name).unwrap();
    }
    assert_eq!(cache.calls_made(), 500);

    for _ in 0..3 {
        for name in &names {
            assert_eq!(cache.sub_breeds(name).unwrap(), vec!["sub"]);
        }
    }
    assert_eq!(cache.calls_made(), 500);
    assert_eq!(cache.cached_len(), 500);
}

#[test]
fn test_other_source_errors_propagate_unchanged() {
    let cache = CachingBreedFetcher::new(FlakyFetcher {
        failures: Cell::new(2),
    });

    for _ in 0..2 {
        match cache.sub_breeds("husky").unwrap_err() {
            Error::Source { message, context } => {
                assert_eq!(message, "connection reset by peer");
                assert_eq!(context.source.as_deref(), Some("flaky"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!cache.is_cached("husky"));
    }
    assert_eq!(cache.calls_made(), 2);

    assert_eq!(cache.sub_breeds("husky").unwrap(), vec!["recovered"]);
    assert_eq!(cache.sub_breeds("husky").unwrap(), vec!["recovered"]);
    assert_eq!(cache.calls_made(), 3);
}

#[test]
fn test_panicking_source_is_still_counted() {
    let cache = CachingBreedFetcher::new(PanickingFetcher);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| cache.sub_breeds("husky")));

    assert!(outcome.is_err());
    assert_eq!(cache.calls_made(), 1);
    assert!(!cache.is_cached("husky"));
}

#[test]
fn test_caches_stack_as_fetchers() {
    let inner = CachingBreedFetcher::new(RecordingFetcher::new(&[("husky", &["example"])]));
    let outer = CachingBreedFetcher::new(&inner);

    assert_eq!(outer.sub_breeds("husky").unwrap(), vec!["example"]);
    assert_eq!(outer.sub_breeds("husky").unwrap(), vec!["example"]);
    assert!(outer.sub_breeds("cat").is_err());

    assert_eq!(outer.calls_made(), 2);
    assert_eq!(inner.calls_made(), 2);
    assert_eq!(inner.source().requests(), vec!["husky", "cat"]);
}

#[test]
fn test_boxed_source() {
    let source: Box<dyn BreedFetcher> = Box::new(RecordingFetcher::new(&[("pug", &[])]));
    let cache = CachingBreedFetcher::new(source);

    assert!(cache.sub_breeds("pug").unwrap().is_empty());
    assert!(cache.sub_breeds("pug").unwrap().is_empty());
    assert_eq!(cache.calls_made(), 1);
}
