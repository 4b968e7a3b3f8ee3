//! Lookup configuration
//!
//! Settings for the `breed-lookup` binary. Values come from the environment
//! first and can be overridden by the builder methods (command-line flags).

use crate::fetcher::StaticBreedFetcher;
use crate::{Error, ErrorContext, Result};
use std::env;
use std::path::PathBuf;

pub const DATA_PATH_ENV: &str = "BREED_DATA_PATH";
pub const STATS_JSON_ENV: &str = "BREED_STATS_JSON";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupConfig {
    /// Breed-list file (JSON or YAML) backing the source.
    pub data_path: Option<PathBuf>,
    /// Print cache statistics as JSON instead of the plain call count.
    pub json_stats: bool,
}

impl LookupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let data_path = var(DATA_PATH_ENV)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let json_stats = var(STATS_JSON_ENV)
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self {
            data_path,
            json_stats,
        }
    }

    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    pub fn with_json_stats(mut self, enabled: bool) -> Self {
        self.json_stats = enabled;
        self
    }

    pub fn load_source(&self) -> Result<StaticBreedFetcher> {
        let path = self.data_path.as_ref().ok_or_else(|| {
            Error::configuration_with_context(
                "no breed data file configured",
                ErrorContext::new()
                    .with_field_path(DATA_PATH_ENV)
                    .with_details("set BREED_DATA_PATH or pass --data <path>")
                    .with_source("lookup_config"),
            )
        })?;
        StaticBreedFetcher::from_path(path)
    }
}
