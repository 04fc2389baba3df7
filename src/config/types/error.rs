//! Configuration error types.

use super::KeyPath;
use crate::config::section::ThemeName;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ResolveError
// ============================================================================

/// Reasons a document fails to resolve into a site plan.
///
/// Every variant carries the key path and, where there is one, the
/// offending value, so the document can be fixed without guesswork.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("missing required key `{key}`")]
    MissingRequiredKey { key: KeyPath },

    #[error("unknown theme `{value}` at `{key}` (known themes: {known})", known = ThemeName::known_names())]
    UnknownTheme { key: KeyPath, value: String },

    #[error("unknown plugin `{value}` at `{key}`")]
    UnknownPlugin { key: KeyPath, value: String },

    #[error("unknown markdown extension `{value}` at `{key}`")]
    UnknownExtension { key: KeyPath, value: String },

    #[error("unknown theme feature `{value}` at `{key}`")]
    UnknownFeature { key: KeyPath, value: String },

    #[error("malformed navigation at `{key}`: {reason}")]
    MalformedNavigation { key: KeyPath, reason: String },

    #[error("`{key}` must be a {expected}, found {found}")]
    InvalidType {
        key: KeyPath,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid value `{value}` at `{key}`: {reason}")]
    InvalidValue {
        key: KeyPath,
        value: String,
        reason: String,
    },
}

impl ResolveError {
    /// Key path that triggered the failure.
    pub fn key(&self) -> &KeyPath {
        match self {
            Self::MissingRequiredKey { key }
            | Self::UnknownTheme { key, .. }
            | Self::UnknownPlugin { key, .. }
            | Self::UnknownExtension { key, .. }
            | Self::UnknownFeature { key, .. }
            | Self::MalformedNavigation { key, .. }
            | Self::InvalidType { key, .. }
            | Self::InvalidValue { key, .. } => key,
        }
    }

    /// Offending value, when the failure is about a specific value.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::UnknownTheme { value, .. }
            | Self::UnknownPlugin { value, .. }
            | Self::UnknownExtension { value, .. }
            | Self::UnknownFeature { value, .. }
            | Self::InvalidValue { value, .. } => Some(value),
            Self::MissingRequiredKey { .. }
            | Self::MalformedNavigation { .. }
            | Self::InvalidType { .. } => None,
        }
    }

    pub(crate) fn missing(key: KeyPath) -> Self {
        Self::MissingRequiredKey { key }
    }

    pub(crate) fn invalid_type(
        key: &KeyPath,
        expected: &'static str,
        found: &crate::config::ConfigValue,
    ) -> Self {
        Self::InvalidType {
            key: key.clone(),
            expected,
            found: found.kind(),
        }
    }

    pub(crate) fn malformed_nav(key: &KeyPath, reason: impl Into<String>) -> Self {
        Self::MalformedNavigation {
            key: key.clone(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// ConfigError
// ============================================================================

/// Errors raised while loading a document from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("YAML parsing error")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported config format `{0}` (expected .yml, .yaml or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("config document must be a mapping, found {0}")]
    NotAMapping(&'static str),

    // No #[from] source chain: the resolve error already names key and value
    #[error("{0}")]
    Resolve(ResolveError),
}

impl From<ResolveError> for ConfigError {
    fn from(err: ResolveError) -> Self {
        Self::Resolve(err)
    }
}
