//! In-memory breed table.

use super::BreedFetcher;
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const STATUS_SUCCESS: &str = "success";

/// Breed-list document, as served by the `breeds/list/all` endpoint:
///
/// ```json
/// { "status": "success", "message": { "hound": ["afghan", "basset"], "pug": [] } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedList {
    #[serde(default = "default_status")]
    pub status: String,
    pub message: BTreeMap<String, Vec<String>>,
}

fn default_status() -> String {
    STATUS_SUCCESS.to_string()
}

/// A [`BreedFetcher`] answering from a fixed table.
///
/// Useful as a local data source and as a test double.
#[derive(Debug, Clone, Default)]
pub struct StaticBreedFetcher {
    breeds: BTreeMap<String, Vec<String>>,
}

impl StaticBreedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_breed<I, S>(mut self, breed: impl Into<String>, sub_breeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let subs = sub_breeds.into_iter().map(Into::into).collect();
        self.breeds.insert(breed.into(), subs);
        self
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        Self {
            breeds: entries.into_iter().collect(),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let doc: BreedList = serde_json::from_str(content)?;
        Self::from_document(doc)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let doc: BreedList = serde_yaml::from_str(content).map_err(|e| {
            Error::source_with_context(
                "invalid breed list",
                ErrorContext::new()
                    .with_details(e.to_string())
                    .with_source("breed_table"),
            )
        })?;
        Self::from_document(doc)
    }

    /// Loads a breed-list file. `.yaml` / `.yml` files are read as YAML,
    /// anything else as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .map(|ext| ext == "yaml" || ext == "yml")
            .unwrap_or(false);
        let table = if is_yaml {
            Self::from_yaml_str(&content)?
        } else {
            Self::from_json_str(&content)?
        };
        tracing::debug!(path = %path.display(), breeds = table.len(), "loaded breed table");
        Ok(table)
    }

    fn from_document(doc: BreedList) -> Result<Self> {
        if doc.status != STATUS_SUCCESS {
            return Err(Error::source_with_context(
                "breed list reports failure",
                ErrorContext::new()
                    .with_field_path("status")
                    .with_details(doc.status)
                    .with_source("breed_table"),
            ));
        }
        Ok(Self {
            breeds: doc.message,
        })
    }

    /// Known breed names, sorted.
    pub fn breeds(&self) -> impl Iterator<Item = &str> {
        self.breeds.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }
}

impl BreedFetcher for StaticBreedFetcher {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        self.breeds
            .get(breed)
            .cloned()
            .ok_or_else(|| Error::not_found(breed))
    }
}
