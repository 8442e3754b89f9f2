//! Document discovery for a single collection.
//!
//! Walks the collection directory recursively and returns one [`Document`]
//! per admitted file, sorted by relative path so repeated runs over the same
//! tree always produce the same sequence.
//!
//! ## What is skipped
//!
//! - Hidden entries (`.name`) and editor backups (`name~`), including whole
//!   hidden directories
//! - Directories themselves (only files become documents)
//! - Anything [`SafeModeFilter`] rejects, silently
//! - Entries that disappear mid-walk, dangling links, and link loops
//!
//! - Files whose path is not valid UTF-8 (their relative path would be
//!   ambiguous)
//!
//! In safe mode a collection directory that is itself a symlink yields no
//! documents.
//!
//! A missing collection directory is not an error: it yields no documents.
//! Any other walk failure (e.g. permission denied on a subdirectory) is
//! returned to the caller.
//!
//! ## Links
//!
//! Outside safe mode links are followed, so a symlinked file is a document
//! and a symlinked directory is descended. In safe mode links are not
//! followed and every candidate goes through the filter, which rejects them.

use crate::document::Document;
use crate::paths::{CollectionPaths, to_slash};
use crate::safe_mode::{self, SafeModeFilter};
use std::fs;
use std::io;
use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum DiscoverError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Cannot walk collection directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Discover the documents of the collection at `paths`.
///
/// Relative paths are prefixed with the collection's relative directory, so
/// they are relative to the source root (`_methods/site/generate.md`).
pub fn discover(
    paths: &CollectionPaths,
    label: &str,
    filter: SafeModeFilter,
) -> Result<Vec<Document>, DiscoverError> {
    let directory = &paths.directory;

    match fs::metadata(directory) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            debug!(directory = %directory.display(), "collection path is not a directory");
            return Ok(Vec::new());
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(directory = %directory.display(), "collection directory does not exist");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    }

    if filter.enabled() && safe_mode::is_symlink(directory) {
        debug!(directory = %directory.display(), "safe mode: collection directory is a symlink");
        return Ok(Vec::new());
    }

    let walker = WalkDir::new(directory)
        .follow_links(!filter.enabled())
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_ignored(e));

    let mut docs = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_skippable(&err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let file_type = entry.file_type();
        if !(file_type.is_file() || file_type.is_symlink()) {
            continue;
        }

        if !filter.is_allowed(entry.path(), directory) {
            debug!(path = %entry.path().display(), "excluded by safe mode");
            continue;
        }

        let Ok(inner) = entry.path().strip_prefix(directory) else {
            continue;
        };
        let Some(inner) = to_slash(inner) else {
            debug!(path = %entry.path().display(), "skipping non-UTF-8 path");
            continue;
        };

        docs.push(Document {
            relative_path: format!("{}/{}", paths.relative_directory, inner),
            path: entry.path().to_path_buf(),
            collection: label.to_string(),
        });
    }

    docs.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(docs)
}

fn is_ignored(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name.ends_with('~')
}

/// Walk errors that only affect one entry and never the rest of the tree.
fn is_skippable(err: &walkdir::Error) -> bool {
    if err.loop_ancestor().is_some() {
        return true;
    }
    err.io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}
