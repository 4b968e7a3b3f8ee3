//! # breed-cache
//!
//! 品种查询缓存：为子品种查询提供内存缓存，并统计对底层数据源的调用次数。
//!
//! Caching decorator for breed / sub-breed lookups.
//!
//! ## Overview
//!
//! A [`BreedFetcher`] maps a breed name to its sub-breeds. Remote sources are
//! slow and rate limited, so [`CachingBreedFetcher`] sits in front of one and
//! consults it only until it has answered successfully for a given breed.
//! Failed lookups are never cached. Every call that reaches the source is
//! counted and exposed through [`CachingBreedFetcher::calls_made`].
//!
//! ## Quick Start
//!
//! ```rust
//! use breed_cache::{BreedFetcher, CachingBreedFetcher, StaticBreedFetcher};
//!
//! fn main() -> breed_cache::Result<()> {
//!     let source = StaticBreedFetcher::new()
//!         .with_breed("hound", ["afghan", "basset", "blood"]);
//!     let fetcher = CachingBreedFetcher::new(source);
//!
//!     let subs = fetcher.sub_breeds("hound")?;
//!     assert_eq!(subs, vec!["afghan", "basset", "blood"]);
//!     fetcher.sub_breeds("hound")?;
//!     assert_eq!(fetcher.calls_made(), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`fetcher`] | The [`BreedFetcher`] trait and a table-backed source |
//! | [`cache`] | The caching decorator and its statistics |
//! | [`config`] | Environment-driven settings for the `breed-lookup` binary |
//! | [`error`] | Error types |
//!
//! ## Threading
//!
//! [`CachingBreedFetcher`] is single-threaded. Callers that share one across
//! threads must serialize access themselves.

pub mod cache;
pub mod config;
pub mod fetcher;

// Re-export main types for convenience
pub use cache::{CacheStats, CachingBreedFetcher};
pub use config::LookupConfig;
pub use fetcher::{sub_breed_count, BreedFetcher, StaticBreedFetcher};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
