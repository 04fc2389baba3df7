//! `plugins` section.
//!
//! # Example
//!
//! ```yaml
//! plugins:
//!   - search
//!   - minify:
//!       minify_html: true
//!   - mkdocstrings:
//!       default_handler: python
//!   - git-revision-date-localized
//! ```
//!
//! Plugins run in declaration order, so the resolved list keeps it.

use super::ident::identifiers;
use super::{NamedEntry, named_entries, named_entry_value};
use crate::config::{ConfigValue, ConfigWarning, KeyPath, ResolveError, ValueMap};
use rustc_hash::FxHashSet;
use serde::Serialize;

identifiers! {
    /// Recognized plugin identifiers.
    pub enum PluginKind {
        Search = "search",
        Minify = "minify",
        Optimize = "optimize",
        Mkdocstrings = "mkdocstrings",
        Autorefs = "autorefs",
        GitRevisionDateLocalized = "git-revision-date-localized",
        GitRevisionDate = "git-revision-date",
        GitAuthors = "git-authors",
        GitCommitters = "git-committers",
        Tags = "tags",
        Blog = "blog",
        Social = "social",
        Offline = "offline",
        Privacy = "privacy",
        Info = "info",
        Meta = "meta",
        Redirects = "redirects",
        Macros = "macros",
        AwesomePages = "awesome-pages",
        LiterateNav = "literate-nav",
        SectionIndex = "section-index",
        GenFiles = "gen-files",
        Glightbox = "glightbox",
        I18n = "i18n",
    }
}

/// Downstream collaborator a plugin feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PluginCategory {
    /// Search index builder, runs after every page rendered.
    SearchIndex,
    /// Post-render output processing (minification, image optimization).
    PostProcess,
    /// API reference extraction.
    ApiDocs,
    /// Version-control metadata per document.
    VcsMetadata,
    /// Content, navigation and page generation.
    Content,
}

/// Prefix of the plugins bundled with the material theme.
const MATERIAL_NAMESPACE: &str = "material/";

impl PluginKind {
    /// Resolve a plugin name, accepting the `material/` namespace for the
    /// theme's bundled plugins.
    pub fn lookup(name: &str) -> Option<Self> {
        match name.strip_prefix(MATERIAL_NAMESPACE) {
            Some(bundled) => Self::from_name(bundled).filter(|kind| kind.is_material_bundled()),
            None => Self::from_name(name),
        }
    }

    /// Plugins shipped with the material theme.
    pub const fn is_material_bundled(self) -> bool {
        matches!(
            self,
            Self::Search
                | Self::Optimize
                | Self::Tags
                | Self::Blog
                | Self::Social
                | Self::Offline
                | Self::Privacy
                | Self::Info
                | Self::Meta
        )
    }

    pub const fn category(self) -> PluginCategory {
        match self {
            Self::Search => PluginCategory::SearchIndex,
            Self::Minify | Self::Optimize | Self::Privacy | Self::Offline => {
                PluginCategory::PostProcess
            }
            Self::Mkdocstrings | Self::Autorefs => PluginCategory::ApiDocs,
            Self::GitRevisionDateLocalized
            | Self::GitRevisionDate
            | Self::GitAuthors
            | Self::GitCommitters => PluginCategory::VcsMetadata,
            _ => PluginCategory::Content,
        }
    }
}

/// One stage of the plugin pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluginSpec {
    pub kind: PluginKind,
    pub category: PluginCategory,
    /// Plugin-specific options, passed through untouched.
    pub options: ValueMap,
}

impl PluginSpec {
    pub fn new(kind: PluginKind, options: ValueMap) -> Self {
        Self {
            kind,
            category: kind.category(),
            options,
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Resolve the `plugins` value into an ordered pipeline.
    pub(crate) fn resolve_all(
        value: Option<&ConfigValue>,
        warnings: &mut Vec<ConfigWarning>,
    ) -> Result<Vec<Self>, ResolveError> {
        let Some(value) = value else {
            return Ok(Vec::new());
        };

        let mut seen = FxHashSet::default();
        let mut plugins = Vec::new();
        for NamedEntry { name, options, key } in named_entries(value, &KeyPath::root("plugins"))? {
            let kind = Self::lookup_kind(name, &key)?;
            if !seen.insert(kind) {
                warnings.push(ConfigWarning::Duplicate {
                    key,
                    name: kind.as_str(),
                });
            }
            plugins.push(Self::new(kind, options));
        }
        Ok(plugins)
    }

    fn lookup_kind(name: &str, key: &KeyPath) -> Result<PluginKind, ResolveError> {
        PluginKind::lookup(name).ok_or_else(|| ResolveError::UnknownPlugin {
            key: key.clone(),
            value: name.to_string(),
        })
    }

    pub(crate) fn to_value(&self) -> ConfigValue {
        named_entry_value(self.name(), &self.options)
    }
}
