//! `theme` section.
//!
//! # Example
//!
//! ```yaml
//! theme:
//!   name: material
//!   features:
//!     - navigation.instant
//!     - content.tooltips
//!   font:
//!     text: Roboto
//!   icon:
//!     repo: fontawesome/brands/github
//!   palette:
//!     scheme: slate
//! ```
//!
//! `theme: material` is shorthand for `theme: {name: material}`. Keys other
//! than the ones modelled here are kept as opaque theme options.

mod feature;
mod font;

pub use feature::FeatureFlag;
pub use font::FontSetting;

use super::ident::identifiers;
use super::{expect_list, expect_map, expect_str, lookup, optional_string};
use crate::config::{ConfigValue, ConfigWarning, KeyPath, ResolveError, ValueMap};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

identifiers! {
    /// Known themes.
    pub enum ThemeName {
        Mkdocs = "mkdocs",
        ReadTheDocs = "readthedocs",
        Material = "material",
    }
}

impl ThemeName {
    /// Whether the theme reads `theme.features`.
    pub const fn supports_features(self) -> bool {
        matches!(self, Self::Material)
    }
}

/// Keys of the `theme` mapping that are modelled explicitly.
const MODELLED_KEYS: &[&str] = &[
    "name",
    "features",
    "font",
    "icon",
    "language",
    "custom_dir",
    "palette",
    "collapse_navigation",
];

/// Resolved theme selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeConfig {
    pub name: ThemeName,
    /// Enabled feature flags; absence means disabled.
    pub features: BTreeSet<FeatureFlag>,
    /// Icon overrides, empty for the theme default.
    pub icon: ValueMap,
    pub font: FontSetting,
    pub language: Option<String>,
    pub custom_dir: Option<PathBuf>,
    pub palette: Option<ConfigValue>,
    /// Remaining theme-specific options, in declaration order.
    pub options: ValueMap,
}

impl ThemeConfig {
    /// Theme with every option at its default.
    pub fn named(name: ThemeName) -> Self {
        Self {
            name,
            features: BTreeSet::new(),
            icon: ValueMap::new(),
            font: FontSetting::Default,
            language: None,
            custom_dir: None,
            palette: None,
            options: ValueMap::new(),
        }
    }

    #[inline]
    pub fn has_feature(&self, flag: FeatureFlag) -> bool {
        self.features.contains(&flag)
    }

    /// Resolve the `theme` value.
    ///
    /// Also returns `theme.collapse_navigation` when set, which overrides
    /// the top-level key.
    pub(crate) fn resolve(
        value: Option<&ConfigValue>,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<(Self, Option<bool>), ResolveError> {
        let key = KeyPath::root("theme");
        let name_key = key.key("name");

        let map = match value {
            None => return Err(ResolveError::missing(name_key)),
            Some(ConfigValue::String(name)) => {
                return Ok((Self::named(parse_name(name, &name_key)?), None));
            }
            Some(value @ ConfigValue::Map(_)) => expect_map(value, &key)?,
            Some(other) => return Err(ResolveError::invalid_type(&key, "string or mapping", other)),
        };

        let name = lookup(map, "name").ok_or_else(|| ResolveError::missing(name_key.clone()))?;
        let name = parse_name(expect_str(name, &name_key)?, &name_key)?;

        let features = parse_features(map, &key, warnings)?;
        if !features.is_empty() && !name.supports_features() {
            warnings.push(ConfigWarning::UnsupportedFeatures {
                key: key.key("features"),
                theme: name.as_str(),
            });
        }

        let icon = match lookup(map, "icon") {
            Some(value) => expect_map(value, &key.key("icon"))?.clone(),
            None => ValueMap::new(),
        };

        let collapse = lookup(map, "collapse_navigation")
            .map(|value| super::expect_bool(value, &key.key("collapse_navigation")))
            .transpose()?;

        let theme = Self {
            name,
            features,
            icon,
            font: FontSetting::resolve(lookup(map, "font"), &key.key("font"))?,
            language: optional_string(map, &key, "language")?,
            custom_dir: optional_string(map, &key, "custom_dir")?.map(PathBuf::from),
            palette: lookup(map, "palette").cloned(),
            options: map
                .iter()
                .filter(|(k, _)| !MODELLED_KEYS.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        };
        Ok((theme, collapse))
    }

    /// Document form of this section.
    pub(crate) fn to_value(&self, collapse_navigation: Option<bool>) -> ConfigValue {
        let mut map = ValueMap::new();
        map.insert("name".into(), self.name.as_str().into());
        if !self.features.is_empty() {
            let features = self.features.iter().map(|f| f.as_str().into()).collect();
            map.insert("features".into(), ConfigValue::List(features));
        }
        if let Some(font) = self.font.to_value() {
            map.insert("font".into(), font);
        }
        if !self.icon.is_empty() {
            map.insert("icon".into(), ConfigValue::Map(self.icon.clone()));
        }
        if let Some(language) = &self.language {
            map.insert("language".into(), language.as_str().into());
        }
        if let Some(dir) = &self.custom_dir {
            map.insert("custom_dir".into(), dir.to_string_lossy().into_owned().into());
        }
        if let Some(palette) = &self.palette {
            map.insert("palette".into(), palette.clone());
        }
        if let Some(collapse) = collapse_navigation {
            map.insert("collapse_navigation".into(), collapse.into());
        }
        map.extend(self.options.iter().map(|(k, v)| (k.clone(), v.clone())));
        ConfigValue::Map(map)
    }
}

fn parse_name(name: &str, key: &KeyPath) -> Result<ThemeName, ResolveError> {
    ThemeName::from_name(name).ok_or_else(|| ResolveError::UnknownTheme {
        key: key.clone(),
        value: name.to_string(),
    })
}

fn parse_features(
    map: &ValueMap,
    key: &KeyPath,
    warnings: &mut Vec<ConfigWarning>,
) -> Result<BTreeSet<FeatureFlag>, ResolveError> {
    let key = key.key("features");
    let Some(value) = lookup(map, "features") else {
        return Ok(BTreeSet::new());
    };

    let mut features = BTreeSet::new();
    for (i, item) in expect_list(value, &key)?.iter().enumerate() {
        let item_key = key.index(i);
        let name = expect_str(item, &item_key)?;
        let flag = FeatureFlag::from_name(name).ok_or_else(|| ResolveError::UnknownFeature {
            key: item_key,
            value: name.to_string(),
        })?;
        features.insert(flag);
    }

    for flag in features.iter().filter(|flag| flag.requires_instant()) {
        if !features.contains(&FeatureFlag::NavigationInstant) {
            warnings.push(ConfigWarning::MissingFeature {
                key: key.clone(),
                feature: flag.as_str(),
                requires: FeatureFlag::NavigationInstant.as_str(),
            });
        }
    }

    Ok(features)
}
