//! Collection directory resolution.
//!
//! A collection labelled `methods` lives in `_methods/` directly under the
//! source root. Resolution is pure: it never touches the filesystem and the
//! directory does not have to exist.

use crate::label::Label;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// Where a collection lives, relative to and under the source root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionPaths {
    /// `"_" + label`, always a single path component.
    pub relative_directory: String,
    /// `source_root` joined with `relative_directory`.
    pub directory: PathBuf,
}

pub fn resolve(label: &Label, source_root: &Path) -> CollectionPaths {
    let relative_directory = format!("_{label}");
    let directory = source_root.join(&relative_directory);
    CollectionPaths {
        relative_directory,
        directory,
    }
}

/// Render a relative path with `/` separators regardless of host OS.
///
/// Only normal components are kept; `.` and prefixes are dropped. Returns
/// `None` if a component is not valid UTF-8, since a lossy rendering could
/// give two different files the same relative path.
pub fn to_slash(path: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in path.components() {
        if let Component::Normal(part) = component {
            parts.push(part.to_str()?);
        }
    }
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_directory_is_underscore_label() {
        let label = Label::new("methods").unwrap();
        let paths = resolve(&label, Path::new("/site/source"));
        assert_eq!(paths.relative_directory, "_methods");
        assert_eq!(paths.directory, Path::new("/site/source").join("_methods"));
    }

    #[test]
    fn evil_label_stays_under_source_root() {
        let root = Path::new("/site/source");
        let label = Label::new("../../etc/password").unwrap();
        let paths = resolve(&label, root);
        assert_eq!(paths.relative_directory, "_etcpassword");
        assert_eq!(paths.directory, root.join("_etcpassword"));
        assert_eq!(paths.directory.parent(), Some(root));
    }

    #[test]
    fn directory_need_not_exist() {
        let label = Label::new("nowhere").unwrap();
        let paths = resolve(&label, Path::new("/definitely/not/here"));
        assert!(!paths.directory.exists());
        assert!(paths.directory.ends_with("_nowhere"));
    }

    #[test]
    fn to_slash_joins_components() {
        let path: PathBuf = ["_methods", "site", "generate.md"].iter().collect();
        assert_eq!(to_slash(&path).as_deref(), Some("_methods/site/generate.md"));
    }

    #[test]
    fn to_slash_drops_cur_dir() {
        assert_eq!(to_slash(Path::new("./a/./b.md")).as_deref(), Some("a/b.md"));
    }

    #[cfg(unix)]
    #[test]
    fn to_slash_rejects_non_utf8_component() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new("site").join(OsStr::from_bytes(b"caf\xe9.md"));
        assert_eq!(to_slash(&path), None);
    }
}
