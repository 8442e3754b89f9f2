//! CLI output formatting for a built collection registry.
//!
//! Output leads with each collection's positional index and label; the
//! directory it was read from and its documents follow as indented context
//! lines:
//!
//! ```text
//! Collections (safe mode)
//! 001 methods (4 documents)
//!     Source: _methods/
//!     001 configuration.md
//!     002 sanitized_path.md
//!     003 site/generate.md
//!     004 site/initialize.md
//! 002 posts (no documents)
//!     Source: _posts/
//!
//! Found 4 documents in 2 collections
//! ```
//!
//! `format_*` functions return lines and do no I/O; `print_*` wrappers write
//! them to stdout.

use crate::collection::Collection;
use crate::registry::CollectionRegistry;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    match n {
        0 => format!("no {word}s"),
        1 => format!("1 {word}"),
        _ => format!("{n} {word}s"),
    }
}

/// Collection header: index, label and document count.
fn collection_header(index: usize, collection: &Collection) -> String {
    format!(
        "{} {} ({})",
        format_index(index),
        collection.label(),
        plural(collection.docs().len(), "document")
    )
}

/// Document path shown inside its collection (without the `_label/` prefix).
fn document_line(index: usize, relative_path: &str, relative_directory: &str) -> String {
    let inner = relative_path
        .strip_prefix(relative_directory)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(relative_path);
    format!("{} {}", format_index(index), inner)
}

pub fn format_registry(registry: &CollectionRegistry, safe_mode: bool) -> Vec<String> {
    let mut lines = Vec::new();

    if registry.is_empty() {
        lines.push("No collections configured".to_string());
        return lines;
    }

    if safe_mode {
        lines.push("Collections (safe mode)".to_string());
    } else {
        lines.push("Collections".to_string());
    }

    for (i, (_, collection)) in registry.iter().enumerate() {
        lines.push(collection_header(i + 1, collection));
        lines.push(format!(
            "{}Source: {}/",
            indent(1),
            collection.relative_directory()
        ));
        for (j, doc) in collection.docs().iter().enumerate() {
            lines.push(format!(
                "{}{}",
                indent(1),
                document_line(j + 1, &doc.relative_path, collection.relative_directory())
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Found {} in {}",
        plural(registry.document_count(), "document"),
        plural(registry.len(), "collection")
    ));

    lines
}

/// Print the registry report to stdout.
pub fn print_registry(registry: &CollectionRegistry, safe_mode: bool) {
    for line in format_registry(registry, safe_mode) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(0, "document"), "no documents");
        assert_eq!(plural(1, "document"), "1 document");
        assert_eq!(plural(3, "collection"), "3 collections");
    }

    #[test]
    fn document_line_strips_collection_directory() {
        assert_eq!(
            document_line(3, "_methods/site/generate.md", "_methods"),
            "003 site/generate.md"
        );
    }

    #[test]
    fn empty_registry_message() {
        let registry = CollectionRegistry::default();
        assert_eq!(
            format_registry(&registry, false),
            vec!["No collections configured"]
        );
    }

    #[test]
    fn fixture_registry_listing() {
        let tmp = setup_fixtures();
        let registry = CollectionRegistry::build(["methods"], tmp.path(), false).unwrap();

        let lines = format_registry(&registry, false);
        assert_eq!(
            lines,
            vec![
                "Collections",
                "001 methods (5 documents)",
                "    Source: _methods/",
                "    001 configuration.md",
                "    002 sanitized_path.md",
                "    003 site/generate.md",
                "    004 site/initialize.md",
                "    005 um_hi.md",
                "",
                "Found 5 documents in 1 collection",
            ]
        );
    }

    #[test]
    fn safe_mode_and_empty_collection() {
        let tmp = TempDir::new().unwrap();
        let registry = CollectionRegistry::build(["posts"], tmp.path(), true).unwrap();

        let lines = format_registry(&registry, true);
        assert_eq!(lines[0], "Collections (safe mode)");
        assert_eq!(lines[1], "001 posts (no documents)");
        assert_eq!(lines.last().unwrap(), "Found no documents in 1 collection");
    }
}
