//! `theme.font` setting.

use crate::config::section::{expect_map, optional_string};
use crate::config::{ConfigValue, KeyPath, ResolveError, ValueMap};
use serde::Serialize;

/// Web font selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "mode")]
pub enum FontSetting {
    /// Whatever the theme ships with.
    #[default]
    Default,
    /// `font: false`, system fonts only.
    Disabled,
    /// Explicit text and/or code font families.
    Custom {
        text: Option<String>,
        code: Option<String>,
    },
}

impl FontSetting {
    pub(crate) fn resolve(value: Option<&ConfigValue>, key: &KeyPath) -> Result<Self, ResolveError> {
        match value {
            None | Some(ConfigValue::Bool(true)) => Ok(Self::Default),
            Some(ConfigValue::Bool(false)) => Ok(Self::Disabled),
            Some(value @ ConfigValue::Map(_)) => {
                let map = expect_map(value, key)?;
                Ok(Self::Custom {
                    text: optional_string(map, key, "text")?,
                    code: optional_string(map, key, "code")?,
                })
            }
            Some(other) => Err(ResolveError::invalid_type(key, "mapping or `false`", other)),
        }
    }

    pub(crate) fn to_value(&self) -> Option<ConfigValue> {
        match self {
            Self::Default => None,
            Self::Disabled => Some(ConfigValue::Bool(false)),
            Self::Custom { text, code } => {
                let mut map = ValueMap::new();
                if let Some(text) = text {
                    map.insert("text".into(), text.as_str().into());
                }
                if let Some(code) = code {
                    map.insert("code".into(), code.as_str().into());
                }
                Some(ConfigValue::Map(map))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_shapes() {
        let key = KeyPath::root("theme").key("font");
        assert_eq!(FontSetting::resolve(None, &key).unwrap(), FontSetting::Default);
        assert_eq!(
            FontSetting::resolve(Some(&ConfigValue::Bool(false)), &key).unwrap(),
            FontSetting::Disabled
        );

        let value: ConfigValue = serde_yaml::from_str("text: Roboto\ncode: Roboto Mono").unwrap();
        assert_eq!(
            FontSetting::resolve(Some(&value), &key).unwrap(),
            FontSetting::Custom {
                text: Some("Roboto".into()),
                code: Some("Roboto Mono".into()),
            }
        );

        let err = FontSetting::resolve(Some(&ConfigValue::from("Roboto")), &key).unwrap_err();
        assert_eq!(err.key().as_str(), "theme.font");
    }
}
