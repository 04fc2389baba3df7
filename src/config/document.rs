//! Configuration documents: source text parsed into a [`ConfigValue`] tree.

use super::{ConfigError, ConfigValue, ValueMap};
use std::fs;
use std::path::Path;

/// Source format of a document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// `.yml`/`.yaml` or `.toml`; `None` for anything else.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yml" | "yaml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// A parsed, not yet validated configuration document.
///
/// The root is always a mapping; an empty file is an empty mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: ValueMap,
}

impl Document {
    pub fn from_map(root: ValueMap) -> Self {
        Self { root }
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let value: ConfigValue = serde_yaml::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(text)?;
        Self::from_value(ConfigValue::from(toml::Value::Table(table)))
    }

    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self, ConfigError> {
        match format {
            DocumentFormat::Yaml => Self::from_yaml(text),
            DocumentFormat::Toml => Self::from_toml(text),
        }
    }

    /// Read and parse a document file.
    ///
    /// Returns the raw text as well, for content hashing.
    pub fn read(path: &Path) -> Result<(Self, String), ConfigError> {
        let format = DocumentFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let text =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let document = Self::parse(&text, format)?;
        Ok((document, text))
    }

    fn from_value(value: ConfigValue) -> Result<Self, ConfigError> {
        match value {
            ConfigValue::Null => Ok(Self::default()),
            ConfigValue::Map(root) => Ok(Self { root }),
            other => Err(ConfigError::NotAMapping(other.kind())),
        }
    }

    #[inline]
    pub fn root(&self) -> &ValueMap {
        &self.root
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.root.get(key)
    }

    /// Render as YAML, keys in document order.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(&self.root)?)
    }
}
