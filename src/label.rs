//! Collection label sanitizing.
//!
//! Collection names come straight from user configuration, and the label is
//! later used to build a directory path (`_<label>`). Sanitizing keeps only
//! ASCII letters and digits, so no label can carry `..`, `/`, `\` or a drive
//! prefix into that path:
//!
//! - `"methods"` → `"methods"`
//! - `"../../etc/password"` → `"etcpassword"`
//! - `"team bios"` → `"teambios"`
//! - `"..."` → `""` (rejected by [`Label::new`])

use serde::Serialize;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    #[error("Collection name {raw:?} contains no letters or digits")]
    Empty { raw: String },
}

/// Strip every character outside `[A-Za-z0-9]`.
///
/// Pure and idempotent: `sanitize(&sanitize(x)) == sanitize(x)`.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

/// A sanitized, non-empty collection label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Sanitize `raw` into a label. Fails if nothing survives sanitizing.
    pub fn new(raw: &str) -> Result<Self, LabelError> {
        let label = sanitize(raw);
        if label.is_empty() {
            return Err(LabelError::Empty {
                raw: raw.to_string(),
            });
        }
        Ok(Label(label))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
