//! Discovered collection documents.
//!
//! A [`Document`] only records where a file is. Reading and parsing its
//! content belongs to later build stages.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// A file belonging to a collection.
///
/// Identity is `relative_path`: the path from the source root with `/`
/// separators, e.g. `_methods/site/generate.md`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub relative_path: String,
    pub path: PathBuf,
    /// Label of the owning collection.
    pub collection: String,
}

impl Document {
    /// Lowercased file extension without the dot, if any.
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
    }

    /// Path inside the collection directory without the extension.
    ///
    /// `_methods/site/generate.md` → `site/generate`
    pub fn url_stem(&self) -> String {
        let inner = self
            .relative_path
            .split_once('/')
            .map(|(_, rest)| rest)
            .unwrap_or(&self.relative_path);
        let ext_len = Path::new(inner)
            .extension()
            .map(|e| e.len() + 1)
            .unwrap_or(0);
        inner[..inner.len() - ext_len].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(relative_path: &str) -> Document {
        Document {
            relative_path: relative_path.to_string(),
            path: Path::new("/src").join(relative_path),
            collection: "methods".to_string(),
        }
    }

    #[test]
    fn extension_lowercased() {
        assert_eq!(doc("_methods/README.MD").extension().as_deref(), Some("md"));
    }

    #[test]
    fn extension_none_without_dot() {
        assert_eq!(doc("_methods/LICENSE").extension(), None);
    }

    #[test]
    fn url_stem_strips_collection_and_extension() {
        assert_eq!(doc("_methods/site/generate.md").url_stem(), "site/generate");
    }

    #[test]
    fn url_stem_keeps_inner_dots() {
        assert_eq!(doc("_methods/v1.2/notes.txt").url_stem(), "v1.2/notes");
    }

    #[test]
    fn url_stem_without_extension() {
        assert_eq!(doc("_methods/LICENSE").url_stem(), "LICENSE");
    }
}
