//! Shared test utilities for the site-collections test suite.
//!
//! Builds the `_methods` fixture tree in a temp directory and provides
//! lookup helpers that panic with a clear message on miss.
//!
//! ```text
//! <tmp>/
//! └── _methods/
//!     ├── configuration.md
//!     ├── sanitized_path.md
//!     ├── site/
//!     │   ├── generate.md
//!     │   └── initialize.md
//!     └── um_hi.md -> sanitized_path.md   (plain copy on non-Unix hosts)
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::collection::Collection;
use crate::registry::CollectionRegistry;

/// Relative paths of every document in the fixture, in discovery order.
pub const METHODS_DOCS: &[&str] = &[
    "_methods/configuration.md",
    "_methods/sanitized_path.md",
    "_methods/site/generate.md",
    "_methods/site/initialize.md",
    "_methods/um_hi.md",
];

// =========================================================================
// Fixture setup
// =========================================================================

/// Create the `_methods` fixture in a fresh temp directory.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_methods_fixture(tmp.path()).unwrap();
    tmp
}

fn write_methods_fixture(root: &Path) -> std::io::Result<()> {
    let dir = root.join("_methods");
    fs::create_dir_all(dir.join("site"))?;
    fs::write(dir.join("configuration.md"), "# Configuration\n")?;
    fs::write(dir.join("sanitized_path.md"), "# Sanitized Path\n")?;
    fs::write(dir.join("site/generate.md"), "# Site#generate\n")?;
    fs::write(dir.join("site/initialize.md"), "# Site#initialize\n")?;

    #[cfg(unix)]
    std::os::unix::fs::symlink("sanitized_path.md", dir.join("um_hi.md"))?;
    #[cfg(not(unix))]
    fs::copy(dir.join("sanitized_path.md"), dir.join("um_hi.md")).map(|_| ())?;

    Ok(())
}

// =========================================================================
// Lookups
// =========================================================================

/// Find a collection by label. Panics if not found.
pub fn find_collection<'a>(registry: &'a CollectionRegistry, label: &str) -> &'a Collection {
    registry.get(label).unwrap_or_else(|| {
        let labels: Vec<&str> = registry.labels().collect();
        panic!("collection '{label}' not found. Available: {labels:?}")
    })
}

/// All document relative paths in collection order.
pub fn doc_paths(collection: &Collection) -> Vec<&str> {
    collection
        .docs()
        .iter()
        .map(|d| d.relative_path.as_str())
        .collect()
}
