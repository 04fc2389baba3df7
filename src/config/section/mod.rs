//! Configuration section definitions.
//!
//! Each module resolves one group of keys from the document:
//!
//! | Module      | Keys                                                  |
//! |-------------|-------------------------------------------------------|
//! | `site`      | `site_*`, `repo_*`, `edit_uri`, `copyright`, `extra`  |
//! | `theme`     | `theme`, `collapse_navigation`                        |
//! | `nav`       | `nav`                                                 |
//! | `extension` | `markdown_extensions`                                 |
//! | `plugin`    | `plugins`                                             |
//! | `build`     | `docs_dir`, `site_dir`, `strict`, `extra_css`, ...    |
//! | `serve`     | `dev_addr`                                            |
//!
//! Shared helpers here turn [`ConfigValue`]s into typed values, reporting
//! the exact key path on mismatch.

mod ident;

pub mod build;
pub mod extension;
pub mod nav;
pub mod plugin;
mod serve;
pub mod site;
pub mod theme;

pub use build::BuildConfig;
pub use extension::{ExtensionSpec, MarkdownExtension};
pub use nav::{NavTarget, Navigation, NavigationNode};
pub use plugin::{PluginCategory, PluginKind, PluginSpec};
pub use serve::ServeConfig;
pub use site::{ExtraConfig, RepoInfo, SiteInfo, SocialLink};
pub use theme::{FeatureFlag, FontSetting, ThemeConfig, ThemeName};

use crate::config::{ConfigValue, KeyPath, ResolveError, ValueMap};

// ============================================================================
// typed access
// ============================================================================

pub(crate) fn expect_str<'a>(value: &'a ConfigValue, key: &KeyPath) -> Result<&'a str, ResolveError> {
    value
        .as_str()
        .ok_or_else(|| ResolveError::invalid_type(key, "string", value))
}

pub(crate) fn expect_bool(value: &ConfigValue, key: &KeyPath) -> Result<bool, ResolveError> {
    value
        .as_bool()
        .ok_or_else(|| ResolveError::invalid_type(key, "boolean", value))
}

pub(crate) fn expect_map<'a>(value: &'a ConfigValue, key: &KeyPath) -> Result<&'a ValueMap, ResolveError> {
    value
        .as_map()
        .ok_or_else(|| ResolveError::invalid_type(key, "mapping", value))
}

pub(crate) fn expect_list<'a>(
    value: &'a ConfigValue,
    key: &KeyPath,
) -> Result<&'a [ConfigValue], ResolveError> {
    value
        .as_list()
        .ok_or_else(|| ResolveError::invalid_type(key, "list", value))
}

/// Look up `name` in `map`; null counts as absent.
pub(crate) fn lookup<'a>(map: &'a ValueMap, name: &str) -> Option<&'a ConfigValue> {
    map.get(name).filter(|value| !value.is_null())
}

/// Optional string field, falling back to an empty string.
pub(crate) fn string_or_empty(
    map: &ValueMap,
    parent: &KeyPath,
    name: &str,
) -> Result<String, ResolveError> {
    Ok(optional_string(map, parent, name)?.unwrap_or_default())
}

pub(crate) fn optional_string(
    map: &ValueMap,
    parent: &KeyPath,
    name: &str,
) -> Result<Option<String>, ResolveError> {
    lookup(map, name)
        .map(|value| expect_str(value, &parent.key(name)).map(str::to_string))
        .transpose()
}

pub(crate) fn bool_or(
    map: &ValueMap,
    parent: &KeyPath,
    name: &str,
    default: bool,
) -> Result<bool, ResolveError> {
    lookup(map, name).map_or(Ok(default), |value| expect_bool(value, &parent.key(name)))
}

/// List of strings; a single string is accepted as a one-element list.
pub(crate) fn string_list(
    map: &ValueMap,
    parent: &KeyPath,
    name: &str,
) -> Result<Vec<String>, ResolveError> {
    let key = parent.key(name);
    match lookup(map, name) {
        None => Ok(Vec::new()),
        Some(ConfigValue::String(s)) => Ok(vec![s.clone()]),
        Some(value) => expect_list(value, &key)?
            .iter()
            .enumerate()
            .map(|(i, item)| expect_str(item, &key.index(i)).map(str::to_string))
            .collect(),
    }
}

// ============================================================================
// named entry lists (plugins, markdown_extensions)
// ============================================================================

/// One entry of an ordered identifier list, before the name is checked.
#[derive(Debug)]
pub(crate) struct NamedEntry<'a> {
    pub name: &'a str,
    pub options: ValueMap,
    pub key: KeyPath,
}

/// Split a `plugins`-style value into named entries.
///
/// Accepted entry shapes, in a list:
/// - `search`
/// - `{name: search, lang: en}`
/// - `{search: {lang: en}}`
///
/// The whole value may also be a mapping of `name: options`.
pub(crate) fn named_entries<'a>(
    value: &'a ConfigValue,
    key: &KeyPath,
) -> Result<Vec<NamedEntry<'a>>, ResolveError> {
    match value {
        ConfigValue::Null => Ok(Vec::new()),
        ConfigValue::List(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| list_entry(item, key.index(i)))
            .collect(),
        ConfigValue::Map(map) => map
            .iter()
            .map(|(name, options)| {
                let key = key.key(name);
                Ok(NamedEntry {
                    name,
                    options: entry_options(options, &key)?,
                    key,
                })
            })
            .collect(),
        other => Err(ResolveError::invalid_type(key, "list", other)),
    }
}

fn list_entry(item: &ConfigValue, key: KeyPath) -> Result<NamedEntry<'_>, ResolveError> {
    match item {
        ConfigValue::String(name) => Ok(NamedEntry {
            name,
            options: ValueMap::new(),
            key,
        }),
        ConfigValue::Map(map) => {
            if let Some(ConfigValue::String(name)) = map.get("name") {
                let options = map
                    .iter()
                    .filter(|(k, _)| k.as_str() != "name")
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                return Ok(NamedEntry { name, options, key });
            }
            if map.len() > 1 {
                return Err(ResolveError::InvalidValue {
                    key,
                    value: item.describe(),
                    reason: format!(
                        "expected a single `name: options` pair, found {} keys",
                        map.len()
                    ),
                });
            }
            let Some((name, options)) = map.first() else {
                return Err(ResolveError::InvalidValue {
                    key,
                    value: "{}".to_string(),
                    reason: "entry has no name".to_string(),
                });
            };
            let options = entry_options(options, &key.key(name))?;
            Ok(NamedEntry { name, options, key })
        }
        other => Err(ResolveError::invalid_type(&key, "string or mapping", other)),
    }
}

fn entry_options(options: &ConfigValue, key: &KeyPath) -> Result<ValueMap, ResolveError> {
    match options {
        ConfigValue::Null => Ok(ValueMap::new()),
        ConfigValue::Map(map) => Ok(map.clone()),
        other => Err(ResolveError::invalid_type(key, "mapping", other)),
    }
}

/// Render a named entry back into the document shape: bare name when it
/// has no options, `{name: options}` otherwise.
pub(crate) fn named_entry_value(name: &str, options: &ValueMap) -> ConfigValue {
    if options.is_empty() {
        ConfigValue::from(name)
    } else {
        let mut map = ValueMap::new();
        map.insert(name.to_string(), ConfigValue::Map(options.clone()));
        ConfigValue::Map(map)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(text: &str) -> ConfigValue {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn test_named_entries_all_shapes() {
        let value = yaml(
            "- search\n- {name: minify, minify_html: true}\n- mkdocstrings:\n    default_handler: python\n- tags:",
        );
        let entries = named_entries(&value, &KeyPath::root("plugins")).unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name).collect();
        assert_eq!(names, ["search", "minify", "mkdocstrings", "tags"]);
        assert!(entries[0].options.is_empty());
        assert_eq!(entries[1].options["minify_html"], ConfigValue::Bool(true));
        assert!(!entries[1].options.contains_key("name"));
        assert_eq!(entries[2].options["default_handler"].as_str(), Some("python"));
        assert!(entries[3].options.is_empty());
        assert_eq!(entries[2].key.as_str(), "plugins[2]");
    }

    #[test]
    fn test_named_entries_mapping_form() {
        let value = yaml("search: {}\nminify:\n  minify_html: true");
        let entries = named_entries(&value, &KeyPath::root("plugins")).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].key.as_str(), "plugins.minify");
    }

    #[test]
    fn test_named_entries_reject_bad_shapes() {
        let key = KeyPath::root("plugins");
        assert!(matches!(
            named_entries(&yaml("- 3"), &key),
            Err(ResolveError::InvalidType { .. })
        ));
        assert!(matches!(
            named_entries(&yaml("- {a: {}, b: {}}"), &key),
            Err(ResolveError::InvalidValue { .. })
        ));
        assert!(matches!(
            named_entries(&yaml("- search: true"), &key),
            Err(ResolveError::InvalidType { .. })
        ));
        assert!(matches!(
            named_entries(&yaml("search"), &key),
            Err(ResolveError::InvalidType { .. })
        ));
    }

    #[test]
    fn test_string_list_accepts_single_string() {
        let map = yaml("watch: includes\nextra_css: [a.css, b.css]");
        let map = map.as_map().unwrap();
        let root = KeyPath::default();
        assert_eq!(string_list(map, &root, "watch").unwrap(), ["includes"]);
        assert_eq!(string_list(map, &root, "extra_css").unwrap(), ["a.css", "b.css"]);
        assert!(string_list(map, &root, "missing").unwrap().is_empty());
    }

    #[test]
    fn test_null_is_absent() {
        let map = yaml("site_author:\nstrict: true");
        let map = map.as_map().unwrap();
        let root = KeyPath::default();
        assert_eq!(string_or_empty(map, &root, "site_author").unwrap(), "");
        assert!(bool_or(map, &root, "strict", false).unwrap());
        assert!(bool_or(map, &root, "other", true).unwrap());
    }
}
