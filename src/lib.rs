//! # Site Collections
//!
//! Collections group a site's source documents under a name: blog posts,
//! team bios, API methods. A collection named `methods` lives in the
//! `_methods/` directory of the source root, and every file below it is one
//! of its documents.
//!
//! The name comes from user configuration, so it is treated as hostile:
//! it is reduced to ASCII letters and digits before it ever becomes part of
//! a path. In safe mode, documents reachable only through symbolic links
//! are refused.
//!
//! # Flow
//!
//! ```text
//! config.toml ──► CollectionRegistry::build(names, source, safe)
//!                   │  for each name
//!                   ├─ label::sanitize       "../../etc/x" → "etcx"
//!                   ├─ paths::resolve        → _etcx, <source>/_etcx
//!                   └─ Collection::populate
//!                        └─ discover::discover  walk + SafeModeFilter
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`label`] | Label sanitizing and the [`Label`] newtype |
//! | [`paths`] | Collection directory resolution |
//! | [`safe_mode`] | Symlink-aware admission of documents in safe mode |
//! | [`discover`] | Recursive, deterministic document discovery |
//! | [`document`] | The [`Document`] descriptor |
//! | [`collection`] | The [`Collection`] entity and its populated snapshots |
//! | [`registry`] | Label → collection map for one build pass |
//! | [`config`] | `config.toml` loading, merging and validation |
//! | [`output`] | CLI report formatting |
//!
//! # Design Decisions
//!
//! ## Populating Returns a New Value
//!
//! [`Collection::populate`] does not fill in the receiver. It returns a new
//! collection holding the discovered documents, so nobody can observe a
//! collection with half its documents.
//!
//! ## Safe Mode Asks the Filesystem
//!
//! Whether a file is a link is decided from `lstat`-style metadata, and
//! whether it stays inside its collection from the fully resolved path.
//! File names are never inspected for link-like text.
//!
//! ## Sorted Discovery
//!
//! Directory enumeration order differs between platforms and filesystems.
//! Documents are sorted by relative path, so the same tree always gives the
//! same sequence.

pub mod collection;
pub mod config;
pub mod discover;
pub mod document;
pub mod label;
pub mod output;
pub mod paths;
pub mod registry;
pub mod safe_mode;

pub use collection::{Collection, CollectionError};
pub use document::Document;
pub use label::Label;
pub use registry::{CollectionRegistry, RegistryError};
pub use safe_mode::SafeModeFilter;

#[cfg(test)]
pub(crate) mod test_helpers;
