//! The collection entity.
//!
//! A [`Collection`] is created from a raw, user-supplied name and a source
//! root. Construction only sanitizes and resolves; it never touches the
//! filesystem, and the result has no documents.
//!
//! [`Collection::populate`] runs discovery and returns a *new* collection
//! holding the result. The receiver is left untouched, so a reader can never
//! observe a half-populated value. Populating again recomputes the documents
//! from scratch; it never appends.
//!
//! ```text
//! Collection::new("methods", root)     label + directories, docs = []
//!         │
//!         ▼ populate(safe)
//! Collection { docs = discover(...) }   safe_mode = Some(safe)
//! ```

use crate::discover::{self, DiscoverError};
use crate::document::Document;
use crate::label::{Label, LabelError};
use crate::paths::{self, CollectionPaths};
use crate::safe_mode::SafeModeFilter;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error(transparent)]
    Label(#[from] LabelError),
    #[error("Failed to discover documents: {0}")]
    Discover(#[from] DiscoverError),
}

#[derive(Debug, Clone, Serialize)]
pub struct Collection {
    label: Label,
    #[serde(flatten)]
    paths: CollectionPaths,
    docs: Vec<Document>,
    /// Safe-mode flag the docs were discovered under; `None` until populated.
    #[serde(skip_serializing_if = "Option::is_none")]
    safe_mode: Option<bool>,
}

impl Collection {
    /// Sanitize `raw_label` and resolve its directory under `source_root`.
    pub fn new(raw_label: &str, source_root: &Path) -> Result<Self, CollectionError> {
        let label = Label::new(raw_label)?;
        Ok(Self::from_label(label, source_root))
    }

    pub fn from_label(label: Label, source_root: &Path) -> Self {
        let paths = paths::resolve(&label, source_root);
        Collection {
            label,
            paths,
            docs: Vec::new(),
            safe_mode: None,
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_str()
    }

    /// `_<label>`
    pub fn relative_directory(&self) -> &str {
        &self.paths.relative_directory
    }

    pub fn directory(&self) -> &Path {
        &self.paths.directory
    }

    /// Discovered documents, sorted by relative path. Empty until populated.
    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    pub fn safe_mode(&self) -> Option<bool> {
        self.safe_mode
    }

    pub fn is_populated(&self) -> bool {
        self.safe_mode.is_some()
    }

    /// Discover this collection's documents and return the populated snapshot.
    pub fn populate(&self, safe_mode: bool) -> Result<Collection, CollectionError> {
        let docs = discover::discover(
            &self.paths,
            self.label.as_str(),
            SafeModeFilter::new(safe_mode),
        )?;
        info!(
            collection = %self.label,
            documents = docs.len(),
            safe_mode,
            "populated collection"
        );
        Ok(Collection {
            label: self.label.clone(),
            paths: self.paths.clone(),
            docs,
            safe_mode: Some(safe_mode),
        })
    }

    /// Whether discovery would admit `path` under the flag this collection was
    /// populated with. Unpopulated collections use safe mode off.
    pub fn allowed_document(&self, path: &Path) -> bool {
        self.allowed_document_with(path, self.safe_mode.unwrap_or(false))
    }

    pub fn allowed_document_with(&self, path: &Path, safe_mode: bool) -> bool {
        SafeModeFilter::new(safe_mode).is_allowed(path, self.directory())
    }
}
