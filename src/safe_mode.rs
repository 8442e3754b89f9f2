//! Safe-mode admission of collection documents.
//!
//! In safe mode a document is readable only if it is a real file (not a
//! symbolic link) and its fully resolved location is still inside the
//! collection directory. Both facts come from the filesystem (`lstat` and
//! `realpath` equivalents); the path text is never inspected for link-like
//! names.
//!
//! The collection directory itself must not be a link either: a linked
//! `_methods` would admit a whole tree from elsewhere on disk.
//!
//! Every check is a boolean. A path that cannot be inspected (missing,
//! dangling, permission denied) is simply not allowed.

use std::fs;
use std::path::Path;
use tracing::debug;

/// Capability deciding which files may be read for a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SafeModeFilter {
    enabled: bool,
}

impl SafeModeFilter {
    pub fn new(enabled: bool) -> Self {
        SafeModeFilter { enabled }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Whether `path` may be read as a document of `collection_directory`.
    ///
    /// Always true when safe mode is off.
    pub fn is_allowed(&self, path: &Path, collection_directory: &Path) -> bool {
        if !self.enabled {
            return true;
        }

        if is_symlink(collection_directory) {
            debug!(
                directory = %collection_directory.display(),
                "safe mode: collection directory is a symlink"
            );
            return false;
        }

        match fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_symlink() => {
                debug!(path = %path.display(), "safe mode: rejecting symlink");
                return false;
            }
            Ok(_) => {}
            Err(err) => {
                debug!(path = %path.display(), error = %err, "safe mode: cannot stat");
                return false;
            }
        }

        // The final component is not a link, but a parent directory may be.
        let (Ok(real_path), Ok(real_dir)) = (
            fs::canonicalize(path),
            fs::canonicalize(collection_directory),
        ) else {
            return false;
        };

        let inside = real_path.starts_with(&real_dir);
        if !inside {
            debug!(
                path = %path.display(),
                resolved = %real_path.display(),
                "safe mode: resolves outside collection directory"
            );
        }
        inside
    }
}

/// Whether `path` itself is a symbolic link. Missing paths are not.
pub(crate) fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink())
}

/// Free-function form of [`SafeModeFilter::is_allowed`].
pub fn is_allowed(path: &Path, collection_directory: &Path, safe_mode: bool) -> bool {
    SafeModeFilter::new(safe_mode).is_allowed(path, collection_directory)
}
