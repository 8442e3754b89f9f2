//! Site-level mapping from label to populated [`Collection`].
//!
//! Built once per build pass: every configured name is sanitized once,
//! turned into a collection, populated, and stored under its sanitized
//! label. Collections are built one after another; the map is handed out
//! only after every population has finished.
//!
//! Two raw names that sanitize to the same label collide: the later one
//! wins and a warning is logged. Config validation rejects such name sets
//! before they reach this point (see [`crate::config::SiteConfig::validate`]).

use crate::collection::{Collection, CollectionError};
use crate::label::Label;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Collection error: {0}")]
    Collection(#[from] CollectionError),
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CollectionRegistry {
    collections: BTreeMap<String, Collection>,
}

impl CollectionRegistry {
    /// Build and populate one collection per configured name.
    ///
    /// An empty `labels` yields an empty registry.
    pub fn build<I, S>(
        labels: I,
        source_root: &Path,
        safe_mode: bool,
    ) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collections = BTreeMap::new();

        for raw in labels {
            let raw = raw.as_ref();
            let label = Label::new(raw).map_err(CollectionError::from)?;
            let collection = Collection::from_label(label, source_root).populate(safe_mode)?;

            let key = collection.label().to_string();
            if collections.insert(key.clone(), collection).is_some() {
                warn!(
                    raw,
                    label = %key,
                    "collection name collides with an earlier one; replacing it"
                );
            }
        }

        Ok(CollectionRegistry { collections })
    }

    pub fn get(&self, label: &str) -> Option<&Collection> {
        self.collections.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.collections.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    /// `(label, collection)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Collection)> {
        self.collections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Total number of documents across all collections.
    pub fn document_count(&self) -> usize {
        self.collections.values().map(|c| c.docs().len()).sum()
    }

    pub fn into_map(self) -> BTreeMap<String, Collection> {
        self.collections
    }
}
