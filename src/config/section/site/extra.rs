//! `extra` mapping: social links plus free-form template values.

use crate::config::section::{expect_list, expect_map, expect_str, lookup, optional_string};
use crate::config::{ConfigValue, KeyPath, ResolveError, ValueMap};
use serde::Serialize;

/// One `extra.social` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Resolved `extra` mapping.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtraConfig {
    /// Social links, in declaration order.
    pub social: Vec<SocialLink>,
    /// Every other `extra` key, untouched.
    #[serde(flatten)]
    pub values: ValueMap,
}

impl ExtraConfig {
    pub(crate) fn resolve(value: Option<&ConfigValue>) -> Result<Self, ResolveError> {
        let key = KeyPath::root("extra");
        let Some(value) = value else {
            return Ok(Self::default());
        };
        let map = expect_map(value, &key)?;

        let social = match lookup(map, "social") {
            Some(value) => {
                let key = key.key("social");
                expect_list(value, &key)?
                    .iter()
                    .enumerate()
                    .map(|(i, item)| SocialLink::resolve(item, &key.index(i)))
                    .collect::<Result<_, _>>()?
            }
            None => Vec::new(),
        };

        let values = map
            .iter()
            .filter(|(k, _)| k.as_str() != "social")
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Ok(Self { social, values })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.social.is_empty() && self.values.is_empty()
    }

    pub(crate) fn to_value(&self) -> Option<ConfigValue> {
        if self.is_empty() {
            return None;
        }
        let mut map = ValueMap::new();
        if !self.social.is_empty() {
            let social = self.social.iter().map(SocialLink::to_value).collect();
            map.insert("social".into(), ConfigValue::List(social));
        }
        map.extend(self.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        Some(ConfigValue::Map(map))
    }
}

impl SocialLink {
    fn resolve(value: &ConfigValue, key: &KeyPath) -> Result<Self, ResolveError> {
        let map = expect_map(value, key)?;
        let required = |name: &str| -> Result<String, ResolveError> {
            let value = lookup(map, name).ok_or_else(|| ResolveError::missing(key.key(name)))?;
            expect_str(value, &key.key(name)).map(str::to_string)
        };
        Ok(Self {
            icon: required("icon")?,
            link: required("link")?,
            name: optional_string(map, key, "name")?,
        })
    }

    fn to_value(&self) -> ConfigValue {
        let mut map = ValueMap::new();
        map.insert("icon".into(), self.icon.as_str().into());
        map.insert("link".into(), self.link.as_str().into());
        if let Some(name) = &self.name {
            map.insert("name".into(), name.as_str().into());
        }
        ConfigValue::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str) -> Result<ExtraConfig, ResolveError> {
        let value: ConfigValue = serde_yaml::from_str(text).unwrap();
        ExtraConfig::resolve(Some(&value))
    }

    #[test]
    fn test_social_order_and_values() {
        let extra = resolve(
            "analytics: {provider: google}\nsocial:\n  - icon: fontawesome/brands/github\n    link: https://github.com/acme\n  - icon: fontawesome/brands/mastodon\n    link: https://fosstodon.org/@acme\n    name: Acme on Mastodon\nversion: 2",
        )
        .unwrap();
        let icons: Vec<_> = extra.social.iter().map(|s| s.icon.as_str()).collect();
        assert_eq!(icons, ["fontawesome/brands/github", "fontawesome/brands/mastodon"]);
        assert_eq!(extra.social[1].name.as_deref(), Some("Acme on Mastodon"));
        assert_eq!(extra.values.keys().collect::<Vec<_>>(), ["analytics", "version"]);
    }

    #[test]
    fn test_social_requires_link() {
        let err = resolve("social:\n  - icon: fontawesome/brands/github").unwrap_err();
        assert_eq!(err, ResolveError::missing(KeyPath::root("extra").key("social").index(0).key("link")));
    }

    #[test]
    fn test_extra_must_be_mapping() {
        let err = resolve("[1, 2]").unwrap_err();
        assert!(matches!(err, ResolveError::InvalidType { expected: "mapping", .. }));
        assert!(ExtraConfig::resolve(None).unwrap().is_empty());
    }
}
