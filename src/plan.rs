//! The resolved site plan handed to renderers.
//!
//! A [`SitePlan`] is built once per load by [`crate::config::resolve`] and
//! never mutated afterwards; share it as `Arc<SitePlan>`. It has two
//! external forms:
//!
//! - structural JSON via `serde` ([`SitePlan::to_json`]),
//! - the document schema again ([`SitePlan::to_document`]), which resolves
//!   back into an equal plan.

use crate::config::section::{
    BuildConfig, ExtensionSpec, ExtraConfig, Navigation, PluginSpec, RepoInfo, ServeConfig,
    SiteInfo, ThemeConfig,
};
use crate::config::{ConfigError, ConfigValue, Document, ValueMap};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct SitePlan {
    pub site: SiteInfo,
    pub repo: RepoInfo,
    pub theme: ThemeConfig,
    pub collapse_navigation: bool,
    pub nav: Navigation,
    /// Enabled extensions, in declaration order.
    pub markdown_extensions: Vec<ExtensionSpec>,
    /// Plugin pipeline, in execution order.
    pub plugins: Vec<PluginSpec>,
    pub extra: ExtraConfig,
    pub build: BuildConfig,
    pub serve: ServeConfig,
}

impl SitePlan {
    #[inline]
    pub fn site_name(&self) -> &str {
        &self.site.name
    }

    /// Canonical document form.
    ///
    /// Keys at their default value are omitted; `theme` is always written
    /// in mapping form.
    pub fn to_document(&self) -> Document {
        let mut doc = ValueMap::new();
        self.site.write_into(&mut doc);
        self.repo.write_into(&mut doc);
        doc.insert("theme".into(), self.theme.to_value(None));
        if !self.collapse_navigation {
            doc.insert("collapse_navigation".into(), false.into());
        }
        if let Some(nav) = self.nav.to_value() {
            doc.insert("nav".into(), nav);
        }
        if !self.markdown_extensions.is_empty() {
            let extensions = self.markdown_extensions.iter().map(ExtensionSpec::to_value).collect();
            doc.insert("markdown_extensions".into(), ConfigValue::List(extensions));
        }
        if !self.plugins.is_empty() {
            let plugins = self.plugins.iter().map(PluginSpec::to_value).collect();
            doc.insert("plugins".into(), ConfigValue::List(plugins));
        }
        if let Some(extra) = self.extra.to_value() {
            doc.insert("extra".into(), extra);
        }
        self.build.write_into(&mut doc);
        self.serve.write_into(&mut doc);
        Document::from_map(doc)
    }

    /// Canonical YAML document text.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        self.to_document().to_yaml()
    }

    /// Structural JSON form.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::{FeatureFlag, NavigationNode, PluginKind, ThemeName};
    use crate::config::{ConfigWarning, resolve};

    const FULL: &str = r"
site_name: Acme Docs
site_author: Alice
site_description: Documentation for the Acme toolkit
site_url: https://docs.acme.dev/
copyright: Copyright 2024 Acme
repo_name: acme/toolkit
repo_url: https://github.com/acme/toolkit
edit_uri: edit/main/docs/
theme:
  name: material
  features:
    - navigation.tabs
    - navigation.instant
    - content.code.copy
  font:
    text: Roboto
    code: Roboto Mono
  icon:
    repo: fontawesome/brands/github
  palette:
    - scheme: default
      primary: indigo
    - scheme: slate
  logo: assets/logo.png
  collapse_navigation: false
nav:
  - Home: index.md
  - Guide:
      - guide/install.md
      - Usage: guide/usage.md
  - Issues: https://github.com/acme/toolkit/issues
markdown_extensions:
  - admonition
  - toc:
      permalink: true
  - pymdownx.superfences
plugins:
  - search:
      lang: en
  - minify:
      minify_html: true
  - mkdocstrings
extra:
  social:
    - icon: fontawesome/brands/github
      link: https://github.com/acme
  version:
    provider: mike
docs_dir: documentation
strict: true
dev_addr: 0.0.0.0:8001
extra_css: [stylesheets/extra.css]
";

    fn plan(text: &str) -> SitePlan {
        resolve(&Document::from_yaml(text).unwrap()).unwrap().plan
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let document = Document::from_yaml(FULL).unwrap();
        let first = resolve(&document).unwrap();
        for _ in 0..3 {
            assert_eq!(resolve(&document).unwrap(), first);
        }
    }

    #[test]
    fn test_full_document() {
        let plan = plan(FULL);
        assert_eq!(plan.site_name(), "Acme Docs");
        assert_eq!(plan.theme.name, ThemeName::Material);
        assert!(plan.theme.has_feature(FeatureFlag::ContentCodeCopy));
        assert!(!plan.collapse_navigation);
        assert_eq!(plan.theme.options.keys().collect::<Vec<_>>(), ["logo"]);
        let plugins: Vec<_> = plan.plugins.iter().map(|p| p.kind).collect();
        assert_eq!(
            plugins,
            [PluginKind::Search, PluginKind::Minify, PluginKind::Mkdocstrings]
        );
        assert_eq!(plan.extra.social.len(), 1);
        assert_eq!(plan.build.docs_dir.to_str(), Some("documentation"));
        assert_eq!(plan.serve.dev_addr.port(), 8001);
        assert_eq!(
            plan.repo.edit_url("index.md").as_deref(),
            Some("https://github.com/acme/toolkit/edit/main/docs/index.md")
        );
    }

    #[test]
    fn test_document_form_is_idempotent() {
        for text in [FULL, "site_name: Docs\ntheme: readthedocs"] {
            let plan = plan(text);
            let yaml = plan.to_yaml().unwrap();
            let again = resolve(&Document::from_yaml(&yaml).unwrap()).unwrap();
            assert_eq!(again.plan, plan, "{yaml}");
            assert!(again.warnings.is_empty());
            // Canonical form is a fixed point
            assert_eq!(again.plan.to_yaml().unwrap(), yaml);
        }
    }

    #[test]
    fn test_readthedocs_defaults() {
        let plan = plan("site_name: Docs\ntheme:\n  name: readthedocs");
        assert_eq!(plan.site_name(), "Docs");
        assert!(plan.collapse_navigation);
        assert!(plan.plugins.is_empty());
        assert_eq!(plan.site.author, "");
        assert_eq!(plan.serve.dev_addr.to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn test_unknown_plugin_reported() {
        let err = resolve(
            &Document::from_yaml(
                "site_name: Docs\ntheme: mkdocs\nplugins: [{name: search}, {name: bogus}]",
            )
            .unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.value(), Some("bogus"));
        assert_eq!(err.key().as_str(), "plugins[1]");
    }

    #[test]
    fn test_single_nav_leaf() {
        let plan = plan("site_name: Docs\ntheme: mkdocs\nnav: [{Home: index.md}]");
        assert_eq!(
            plan.nav,
            Navigation::Declared(vec![NavigationNode::page(Some("Home"), "index.md")])
        );
    }

    #[test]
    fn test_unknown_top_level_key_warns() {
        let resolved =
            resolve(&Document::from_yaml("site_name: Docs\ntheme: mkdocs\nfoo: 1").unwrap())
                .unwrap();
        assert_eq!(
            resolved.warnings,
            [ConfigWarning::UnknownKey {
                key: crate::config::KeyPath::root("foo"),
            }]
        );
    }

    #[test]
    fn test_json_form_keeps_order() {
        let json = plan(FULL).to_json().unwrap();
        let search = json.find("\"search\"").unwrap();
        let minify = json.find("\"minify\"").unwrap();
        let mkdocstrings = json.find("\"mkdocstrings\"").unwrap();
        assert!(search < minify && minify < mkdocstrings);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["site"]["name"], "Acme Docs");
        assert_eq!(value["nav"]["mode"], "declared");
        assert_eq!(value["plugins"][1]["category"], "post-process");
    }
}
