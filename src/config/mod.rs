//! Documentation site configuration.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One resolver per group of keys
//! │   ├── build      # docs_dir, site_dir, strict, ...
//! │   ├── extension  # markdown_extensions
//! │   ├── nav        # nav
//! │   ├── plugin     # plugins
//! │   ├── serve      # dev_addr
//! │   ├── site/      # site_*, repo_*, copyright, extra
//! │   └── theme/     # theme
//! ├── types/         # Errors, warnings, key paths, reload handle
//! ├── document       # Source text -> ConfigValue tree
//! ├── value          # ConfigValue
//! └── mod.rs         # resolve() (this file)
//! ```
//!
//! Resolution is a pure function of the [`Document`]: no I/O, no
//! environment lookups. It either returns a complete [`SitePlan`] with its
//! warnings or fails on the first error.

mod document;
pub mod section;
pub mod types;
mod util;
mod value;

pub use document::{Document, DocumentFormat};
pub use types::{ConfigError, ConfigWarning, KeyPath, PlanHandle, Reload, ResolveError};
pub use util::find_config_file;
pub use value::{ConfigValue, ValueMap};

use crate::plan::SitePlan;
use section::{
    BuildConfig, ExtensionSpec, ExtraConfig, Navigation, PluginSpec, RepoInfo, ServeConfig,
    SiteInfo, ThemeConfig, bool_or, lookup,
};
use std::path::Path;

/// Default document name.
pub const DEFAULT_CONFIG_NAME: &str = "mkdocs.yml";

/// Top-level keys the resolver reads. Anything else is reported and ignored.
const KNOWN_KEYS: &[&str] = &[
    "site_name",
    "site_author",
    "site_description",
    "site_url",
    "copyright",
    "repo_name",
    "repo_url",
    "edit_uri",
    "theme",
    "collapse_navigation",
    "nav",
    "markdown_extensions",
    "plugins",
    "extra",
    "docs_dir",
    "site_dir",
    "use_directory_urls",
    "strict",
    "dev_addr",
    "extra_css",
    "extra_javascript",
    "watch",
];

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub plan: SitePlan,
    pub warnings: Vec<ConfigWarning>,
}

/// Resolve a document into a site plan.
pub fn resolve(document: &Document) -> Result<Resolved, ResolveError> {
    let doc = document.root();
    let mut warnings: Vec<ConfigWarning> = doc
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .map(|key| ConfigWarning::UnknownKey {
            key: KeyPath::root(key),
        })
        .collect();

    let site = SiteInfo::resolve(doc)?;
    let repo = RepoInfo::resolve(doc)?;
    let (theme, theme_collapse) = ThemeConfig::resolve(lookup(doc, "theme"), &mut warnings)?;
    let collapse_navigation = bool_or(doc, &KeyPath::default(), "collapse_navigation", true)?;
    let nav = Navigation::resolve(lookup(doc, "nav"))?;
    let markdown_extensions =
        ExtensionSpec::resolve_all(lookup(doc, "markdown_extensions"), &mut warnings)?;
    let plugins = PluginSpec::resolve_all(lookup(doc, "plugins"), &mut warnings)?;
    let extra = ExtraConfig::resolve(lookup(doc, "extra"))?;
    let build = BuildConfig::resolve(doc)?;
    let serve = ServeConfig::resolve(doc)?;

    let plan = SitePlan {
        site,
        repo,
        theme,
        collapse_navigation: theme_collapse.unwrap_or(collapse_navigation),
        nav,
        markdown_extensions,
        plugins,
        extra,
        build,
        serve,
    };
    Ok(Resolved { plan, warnings })
}

/// Read, parse and resolve a document file.
pub fn load(path: &Path) -> Result<Resolved, ConfigError> {
    let (document, _) = Document::read(path)?;
    Ok(resolve(&document)?)
}

// ============================================================================
// tests
// ============================================================================
