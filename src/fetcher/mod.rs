//! Breed data sources.
//!
//! # Breed Fetchers
//!
//! A [`BreedFetcher`] answers one question: which sub-breeds does a breed
//! have? Production sources (HTTP clients, databases) and test doubles both
//! implement it, and so does [`crate::cache::CachingBreedFetcher`], which
//! means decorators can be stacked.
//!
//! ## Key Components
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`BreedFetcher`] | Trait implemented by every breed source |
//! | [`StaticBreedFetcher`] | In-memory table, loadable from JSON or YAML |
//! | [`sub_breed_count`] | Convenience counter that maps "not found" to zero |
//!
//! ## Example
//!
//! ```rust
//! use breed_cache::fetcher::{sub_breed_count, BreedFetcher, StaticBreedFetcher};
//!
//! let source = StaticBreedFetcher::new().with_breed("hound", ["afghan", "basset"]);
//! assert_eq!(source.sub_breeds("hound").unwrap(), vec!["afghan", "basset"]);
//! assert_eq!(sub_breed_count("cat", &source), 0);
//! ```

mod table;

pub use table::{BreedList, StaticBreedFetcher};

use crate::Result;
use std::rc::Rc;

/// A source of sub-breed lists.
pub trait BreedFetcher {
    /// Returns the sub-breeds of `breed`, in source order.
    ///
    /// Fails with [`crate::Error::BreedNotFound`] when the breed is unknown.
    /// Any other error variant is a failure of the source itself.
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>>;
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for &T {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        (**self).sub_breeds(breed)
    }
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for Box<T> {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        (**self).sub_breeds(breed)
    }
}

impl<T: BreedFetcher + ?Sized> BreedFetcher for Rc<T> {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        (**self).sub_breeds(breed)
    }
}

/// Number of sub-breeds of `breed`, or `0` if the fetcher cannot provide them.
pub fn sub_breed_count<F: BreedFetcher + ?Sized>(breed: &str, fetcher: &F) -> usize {
    match fetcher.sub_breeds(breed) {
        Ok(subs) => subs.len(),
        Err(e) if e.is_not_found() => 0,
        Err(e) => {
            tracing::warn!(breed, error = %e, "sub-breed lookup failed");
            0
        }
    }
}
