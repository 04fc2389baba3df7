//! Non-fatal resolution findings.

use super::KeyPath;
use std::fmt;

/// A finding that does not stop resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Top-level key the resolver does not recognize (ignored).
    UnknownKey { key: KeyPath },
    /// Plugin or extension declared more than once (all entries kept).
    Duplicate { key: KeyPath, name: &'static str },
    /// `theme.features` set for a theme that ignores them.
    UnsupportedFeatures { key: KeyPath, theme: &'static str },
    /// A feature flag that only works together with another one.
    MissingFeature {
        key: KeyPath,
        feature: &'static str,
        requires: &'static str,
    },
}

impl ConfigWarning {
    pub fn key(&self) -> &KeyPath {
        match self {
            Self::UnknownKey { key }
            | Self::Duplicate { key, .. }
            | Self::UnsupportedFeatures { key, .. }
            | Self::MissingFeature { key, .. } => key,
        }
    }

    pub const fn is_unknown_key(&self) -> bool {
        matches!(self, Self::UnknownKey { .. })
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey { key } => write!(f, "unknown key `{key}` is ignored"),
            Self::Duplicate { key, name } => {
                write!(f, "`{name}` is declared more than once (again at `{key}`)")
            }
            Self::UnsupportedFeatures { key, theme } => {
                write!(f, "`{key}` has no effect with the `{theme}` theme")
            }
            Self::MissingFeature {
                key,
                feature,
                requires,
            } => write!(f, "`{feature}` in `{key}` requires `{requires}`"),
        }
    }
}

/// Print collected warnings in a grouped format.
///
/// Unknown keys are listed together, other findings one per line.
pub fn report(warnings: &[ConfigWarning], source: &str) {
    let unknown: Vec<_> = warnings.iter().filter(|w| w.is_unknown_key()).collect();
    if !unknown.is_empty() {
        crate::log!("warning"; "unknown keys in {}, ignoring:", source);
        for warning in unknown {
            eprintln!("- {}", warning.key());
        }
    }

    for warning in warnings.iter().filter(|w| !w.is_unknown_key()) {
        crate::log!("warning"; "{}", warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let warning = ConfigWarning::Duplicate {
            key: KeyPath::root("plugins").index(2),
            name: "search",
        };
        assert_eq!(
            warning.to_string(),
            "`search` is declared more than once (again at `plugins[2]`)"
        );
        assert!(!warning.is_unknown_key());
        assert!(ConfigWarning::UnknownKey { key: KeyPath::root("foo") }.is_unknown_key());
    }
}
