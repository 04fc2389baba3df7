//! `nav` section.
//!
//! # Example
//!
//! ```yaml
//! nav:
//!   - Home: index.md
//!   - Guide:
//!       - guide/install.md
//!       - Usage: guide/usage.md
//!   - Issues: https://github.com/acme/docs/issues
//! ```
//!
//! A bare string is a document path (title taken from the page later), a
//! single-key mapping is `title: path | link | [entries]`. Without `nav`
//! the tree is generated from the docs directory, see [`crate::docs`].

use crate::config::{ConfigValue, KeyPath, ResolveError, ValueMap};
use crate::utils::path::is_external_link;
use serde::Serialize;

/// One entry of the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationNode {
    /// Display title; `None` for bare-path leaves.
    pub title: Option<String>,
    pub target: NavTarget,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavTarget {
    /// Document path relative to `docs_dir`.
    Page(String),
    /// External URL.
    Link(String),
    /// Nested entries, in declaration order.
    Section(Vec<NavigationNode>),
}

/// A leaf of the flattened tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry<'a> {
    pub title: Option<&'a str>,
    pub target: &'a str,
    pub external: bool,
    /// Number of enclosing sections.
    pub depth: usize,
}

impl NavigationNode {
    pub fn page(title: Option<&str>, path: impl Into<String>) -> Self {
        Self {
            title: title.map(str::to_string),
            target: NavTarget::Page(path.into()),
        }
    }

    pub fn section(title: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            title: Some(title.into()),
            target: NavTarget::Section(children),
        }
    }

    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Document path, for page leaves only.
    pub fn page_path(&self) -> Option<&str> {
        match &self.target {
            NavTarget::Page(path) => Some(path),
            NavTarget::Link(_) | NavTarget::Section(_) => None,
        }
    }

    pub fn children(&self) -> &[Self] {
        match &self.target {
            NavTarget::Section(children) => children,
            NavTarget::Page(_) | NavTarget::Link(_) => &[],
        }
    }

    fn to_value(&self) -> ConfigValue {
        let target = match &self.target {
            NavTarget::Page(path) | NavTarget::Link(path) => ConfigValue::from(path.as_str()),
            NavTarget::Section(children) => {
                ConfigValue::List(children.iter().map(Self::to_value).collect())
            }
        };
        match (&self.title, &self.target) {
            (None, NavTarget::Page(_) | NavTarget::Link(_)) => target,
            (title, _) => {
                let mut map = ValueMap::new();
                map.insert(title.clone().unwrap_or_default(), target);
                ConfigValue::Map(map)
            }
        }
    }
}

/// Navigation of a site: declared in the document or generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "mode", content = "entries")]
pub enum Navigation {
    /// No `nav` key; generated from the docs directory.
    #[default]
    Auto,
    Declared(Vec<NavigationNode>),
}

impl Navigation {
    pub(crate) fn resolve(value: Option<&ConfigValue>) -> Result<Self, ResolveError> {
        let key = KeyPath::root("nav");
        match value {
            None | Some(ConfigValue::Null) => Ok(Self::Auto),
            Some(ConfigValue::List(items)) => parse_nodes(items, &key).map(Self::Declared),
            Some(other) => Err(ResolveError::invalid_type(&key, "list", other)),
        }
    }

    #[inline]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Top-level entries; empty for [`Navigation::Auto`].
    pub fn nodes(&self) -> &[NavigationNode] {
        match self {
            Self::Auto => &[],
            Self::Declared(nodes) => nodes,
        }
    }

    /// Every leaf in declaration order, sections flattened away.
    pub fn flatten(&self) -> Vec<NavEntry<'_>> {
        let mut out = Vec::new();
        flatten_into(self.nodes(), 0, &mut out);
        out
    }

    /// Document paths referenced by the tree, in declaration order.
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.flatten()
            .into_iter()
            .filter(|entry| !entry.external)
            .map(|entry| entry.target)
    }

    pub(crate) fn to_value(&self) -> Option<ConfigValue> {
        match self {
            Self::Auto => None,
            Self::Declared(nodes) => Some(ConfigValue::List(
                nodes.iter().map(NavigationNode::to_value).collect(),
            )),
        }
    }
}

fn flatten_into<'a>(nodes: &'a [NavigationNode], depth: usize, out: &mut Vec<NavEntry<'a>>) {
    for node in nodes {
        match &node.target {
            NavTarget::Page(path) | NavTarget::Link(path) => out.push(NavEntry {
                title: node.title(),
                target: path,
                external: matches!(node.target, NavTarget::Link(_)),
                depth,
            }),
            NavTarget::Section(children) => flatten_into(children, depth + 1, out),
        }
    }
}

// ============================================================================
// parsing
// ============================================================================

fn parse_nodes(items: &[ConfigValue], key: &KeyPath) -> Result<Vec<NavigationNode>, ResolveError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_node(item, &key.index(i)))
        .collect()
}

fn parse_node(item: &ConfigValue, key: &KeyPath) -> Result<NavigationNode, ResolveError> {
    match item {
        ConfigValue::String(path) => Ok(NavigationNode {
            title: None,
            target: leaf_target(path, key)?,
        }),
        ConfigValue::Map(map) => {
            if map.len() != 1 {
                return Err(ResolveError::malformed_nav(
                    key,
                    format!("expected a single `title: target` pair, found {} keys", map.len()),
                ));
            }
            let Some((title, value)) = map.first() else {
                return Err(ResolveError::malformed_nav(key, "entry is empty"));
            };
            if title.trim().is_empty() {
                return Err(ResolveError::malformed_nav(key, "entry has an empty title"));
            }

            let child_key = key.key(title);
            let target = match value {
                ConfigValue::String(path) => leaf_target(path, &child_key)?,
                ConfigValue::List(children) if children.is_empty() => {
                    return Err(ResolveError::malformed_nav(
                        &child_key,
                        format!("section `{title}` has no entries"),
                    ));
                }
                ConfigValue::List(children) => NavTarget::Section(parse_nodes(children, &child_key)?),
                ConfigValue::Null => {
                    return Err(ResolveError::malformed_nav(
                        &child_key,
                        format!("leaf `{title}` has no path"),
                    ));
                }
                other => {
                    return Err(ResolveError::malformed_nav(
                        &child_key,
                        format!("expected a path or a list of entries, found {}", other.kind()),
                    ));
                }
            };
            Ok(NavigationNode {
                title: Some(title.clone()),
                target,
            })
        }
        other => Err(ResolveError::malformed_nav(
            key,
            format!("expected a path or a `title: target` pair, found {}", other.kind()),
        )),
    }
}

fn leaf_target(path: &str, key: &KeyPath) -> Result<NavTarget, ResolveError> {
    if path.trim().is_empty() {
        return Err(ResolveError::malformed_nav(key, "leaf has no path"));
    }
    if is_external_link(path) {
        Ok(NavTarget::Link(path.to_string()))
    } else {
        Ok(NavTarget::Page(path.to_string()))
    }
}

// ============================================================================
// tests
// ============================================================================
