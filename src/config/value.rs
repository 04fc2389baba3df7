//! Dynamic configuration values.
//!
//! Documents are first read into [`ConfigValue`], a tagged variant over the
//! shapes YAML and TOML can express. Sections convert it into strongly-typed
//! fields only after their own validation rules pass.
//!
//! Mappings keep insertion order (`IndexMap`), so `nav`, `plugins` and
//! `markdown_extensions` come out exactly as declared.

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;

/// Ordered string-keyed mapping of configuration values.
pub type ValueMap = IndexMap<String, ConfigValue>;

/// A loosely-typed configuration value.
///
/// Floats compare by bit pattern, so `.nan` equals itself and resolving
/// the same document twice always gives equal values.
#[derive(Debug, Clone, Default)]
pub enum ConfigValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<ConfigValue>),
    Map(ValueMap),
}

impl ConfigValue {
    /// Human-readable kind, used in type mismatch diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "mapping",
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ConfigValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub const fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Plain text of a scalar value, `None` for null and collections.
    ///
    /// Used for mapping keys (`2024: ...` in a nav tree) and error messages.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(b.to_string()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::String(s) => Some(s.clone()),
            Self::Null | Self::List(_) | Self::Map(_) => None,
        }
    }

    /// Short rendering for diagnostics: scalars as text, collections as JSON.
    pub fn describe(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            other => other
                .scalar_text()
                .unwrap_or_else(|| serde_json::to_string(other).unwrap_or_default()),
        }
    }

    /// Flatten a YAML-tagged value (`!ENV [CI, false]`, `!!python/name:x`)
    /// into an opaque string so it survives serialization unchanged.
    pub fn tagged(tag: &str, value: Self) -> Self {
        let tag = tag.trim_start_matches('!');
        match value {
            Self::Null => Self::String(format!("!{tag}")),
            Self::String(s) if s.is_empty() => Self::String(format!("!{tag}")),
            other => Self::String(format!("!{tag} {}", other.describe())),
        }
    }
}

impl PartialEq for ConfigValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        Self::List(items)
    }
}

impl From<ValueMap> for ConfigValue {
    fn from(map: ValueMap) -> Self {
        Self::Map(map)
    }
}

impl From<toml::Value> for ConfigValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Self::String(s),
            toml::Value::Integer(i) => Self::Integer(i),
            toml::Value::Float(f) => Self::Float(f),
            toml::Value::Boolean(b) => Self::Bool(b),
            toml::Value::Datetime(dt) => Self::String(dt.to_string()),
            toml::Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            toml::Value::Table(table) => Self::Map(
                table
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

// ============================================================================
// serde
// ============================================================================

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::String(s) => serializer.serialize_str(s),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = ConfigValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a configuration value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ConfigValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ConfigValue::Integer(v))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(i64::try_from(v).map_or(ConfigValue::Float(v as f64), ConfigValue::Integer))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ConfigValue::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ConfigValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(ConfigValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ConfigValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(ConfigValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        ConfigValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(ConfigValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = ValueMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(key) = access.next_key::<ConfigValue>()? {
            let Some(key) = key.scalar_text() else {
                return Err(de::Error::custom(format!(
                    "mapping keys must be scalars, found {}",
                    key.kind()
                )));
            };
            let value = access.next_value()?;
            map.insert(key, value);
        }
        Ok(ConfigValue::Map(map))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<Self::Value, A::Error> {
        let (tag, variant): (String, _) = data.variant()?;
        let value: ConfigValue = variant.newtype_variant()?;
        Ok(ConfigValue::tagged(&tag, value))
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_mapping_keeps_order() {
        let value: ConfigValue = serde_yaml::from_str("zeta: 1\nalpha: 2\nmid: 3").unwrap();
        let keys: Vec<_> = value.as_map().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_yaml_scalar_kinds() {
        let value: ConfigValue =
            serde_yaml::from_str("a: true\nb: 3\nc: 1.5\nd: text\ne:\nf: [1, x]").unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map["a"], ConfigValue::Bool(true));
        assert_eq!(map["b"], ConfigValue::Integer(3));
        assert_eq!(map["c"], ConfigValue::Float(1.5));
        assert_eq!(map["d"].as_str(), Some("text"));
        assert!(map["e"].is_null());
        assert_eq!(map["f"].as_list().map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_non_string_keys_become_text() {
        let value: ConfigValue = serde_yaml::from_str("2024: release.md\ntrue: yes").unwrap();
        let map = value.as_map().unwrap();
        assert!(map.contains_key("2024"));
        assert!(map.contains_key("true"));
    }

    #[test]
    fn test_yaml_tagged_value_parses() {
        let value: ConfigValue =
            serde_yaml::from_str("emoji_index: !!python/name:material.extensions.emoji.twemoji")
                .unwrap();
        assert!(value.as_map().unwrap().contains_key("emoji_index"));

        let value: ConfigValue = serde_yaml::from_str("enabled: !ENV CI").unwrap();
        let enabled = value.as_map().unwrap()["enabled"].as_str().unwrap();
        assert!(enabled.starts_with('!'));
        assert!(enabled.contains("ENV"));
    }

    #[test]
    fn test_tagged_flattening() {
        assert_eq!(
            ConfigValue::tagged("!ENV", ConfigValue::from("CI")),
            ConfigValue::from("!ENV CI")
        );
        assert_eq!(
            ConfigValue::tagged("relative", ConfigValue::Null),
            ConfigValue::from("!relative")
        );
        let list = ConfigValue::List(vec!["CI".into(), false.into()]);
        assert_eq!(
            ConfigValue::tagged("ENV", list),
            ConfigValue::from(r#"!ENV ["CI",false]"#)
        );
    }

    #[test]
    fn test_toml_conversion() {
        let table: toml::Table = "b = 1\na = [\"x\"]\n[c]\nd = true".parse().unwrap();
        let value = ConfigValue::from(toml::Value::Table(table));
        let map = value.as_map().unwrap();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a", "c"]);
        assert_eq!(map["c"].as_map().unwrap()["d"], ConfigValue::Bool(true));
    }

    #[test]
    fn test_nan_equals_itself() {
        let a: ConfigValue = serde_yaml::from_str("x: .nan\ny: [1.5, .inf]").unwrap();
        let b: ConfigValue = serde_yaml::from_str("x: .nan\ny: [1.5, .inf]").unwrap();
        assert_eq!(a, b);
        assert_ne!(ConfigValue::Float(1.0), ConfigValue::Integer(1));
    }

    #[test]
    fn test_serialize_roundtrip_through_yaml() {
        let value: ConfigValue = serde_yaml::from_str("k: [1, {x: y}]\nz: null").unwrap();
        let text = serde_yaml::to_string(&value).unwrap();
        let back: ConfigValue = serde_yaml::from_str(&text).unwrap();
        assert_eq!(value, back);
    }
}
