//! Dotted key paths for diagnostics.

use serde::Serialize;
use std::fmt;

/// Location of a value inside a configuration document.
///
/// Rendered as `theme.features[2]` or `nav[1].Guide[0]`, so every
/// diagnostic can point at the exact entry that triggered it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct KeyPath(String);

impl KeyPath {
    /// Path of a top-level key.
    pub fn root(key: &str) -> Self {
        Self(key.to_string())
    }

    /// Path of a child key.
    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self::root(key)
        } else {
            Self(format!("{}.{key}", self.0))
        }
    }

    /// Path of a list element.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for KeyPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
