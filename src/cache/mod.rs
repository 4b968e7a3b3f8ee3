//! 查询缓存模块：在品种数据源之上缓存成功的子品种查询，并统计数据源调用次数。
//!
//! # Lookup Caching Module
//!
//! This module wraps any [`BreedFetcher`](crate::fetcher::BreedFetcher) with an
//! in-memory cache, so the underlying source is consulted at most once per breed
//! that it successfully resolves.
//!
//! ## Caching Policy
//!
//! - **Hit**: the stored list is returned; the source is not called
//! - **Miss**: the source is called and the call is counted, even if it fails
//! - **Success** is stored forever (no TTL, no eviction)
//! - **Failure** is propagated unchanged and nothing is stored, so the next
//!   lookup of the same breed reaches the source again
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`CachingBreedFetcher`] | Caching decorator around a breed source |
//! | [`CacheStats`] | Snapshot of source calls, hits and cached keys |
//!
//! ## Example
//!
//! ```rust
//! use breed_cache::cache::CachingBreedFetcher;
//! use breed_cache::fetcher::{BreedFetcher, StaticBreedFetcher};
//!
//! let source = StaticBreedFetcher::new().with_breed("husky", ["example"]);
//! let cache = CachingBreedFetcher::new(source);
//!
//! assert_eq!(cache.sub_breeds("husky").unwrap(), vec!["example"]);
//! assert_eq!(cache.sub_breeds("husky").unwrap(), vec!["example"]);
//! assert_eq!(cache.calls_made(), 1);
//!
//! assert!(cache.sub_breeds("unknown").is_err());
//! assert!(cache.sub_breeds("unknown").is_err());
//! assert_eq!(cache.calls_made(), 3);
//! ```

mod caching;
mod stats;

pub use caching::CachingBreedFetcher;
pub use stats::CacheStats;
