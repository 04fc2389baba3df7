//! Build keys.
//!
//! # Example
//!
//! ```yaml
//! docs_dir: docs              # Source directory (relative to the document)
//! site_dir: site              # Output directory
//! use_directory_urls: true    # guide/install.md -> guide/install/
//! strict: false               # Treat nav and link warnings as errors
//! extra_css: [stylesheets/extra.css]
//! extra_javascript: [javascripts/extra.js]
//! watch: [includes]           # Extra paths watched in serve mode
//! ```

use super::{bool_or, expect_str, lookup, string_list};
use crate::config::{ConfigValue, KeyPath, ResolveError, ValueMap};
use crate::utils::path::lexical_normalize;
use serde::Serialize;
use std::path::{Path, PathBuf};

const DEFAULT_DOCS_DIR: &str = "docs";
const DEFAULT_SITE_DIR: &str = "site";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
    /// Markdown source directory, as written (not expanded or normalized).
    pub docs_dir: PathBuf,

    /// Build output directory.
    pub site_dir: PathBuf,

    /// Emit `page/index.html` instead of `page.html`.
    pub use_directory_urls: bool,

    /// Treat warnings as errors.
    pub strict: bool,

    /// Stylesheets appended after the theme's, relative to `docs_dir`.
    pub extra_css: Vec<String>,

    /// Scripts appended after the theme's, relative to `docs_dir`.
    pub extra_javascript: Vec<String>,

    /// Extra paths watched for changes.
    pub watch: Vec<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            docs_dir: DEFAULT_DOCS_DIR.into(),
            site_dir: DEFAULT_SITE_DIR.into(),
            use_directory_urls: true,
            strict: false,
            extra_css: Vec::new(),
            extra_javascript: Vec::new(),
            watch: Vec::new(),
        }
    }
}

impl BuildConfig {
    pub(crate) fn resolve(doc: &ValueMap) -> Result<Self, ResolveError> {
        let root = KeyPath::default();
        let defaults = Self::default();

        let build = Self {
            docs_dir: dir_or(doc, "docs_dir", defaults.docs_dir)?,
            site_dir: dir_or(doc, "site_dir", defaults.site_dir)?,
            use_directory_urls: bool_or(doc, &root, "use_directory_urls", defaults.use_directory_urls)?,
            strict: bool_or(doc, &root, "strict", defaults.strict)?,
            extra_css: string_list(doc, &root, "extra_css")?,
            extra_javascript: string_list(doc, &root, "extra_javascript")?,
            watch: string_list(doc, &root, "watch")?
                .into_iter()
                .map(PathBuf::from)
                .collect(),
        };

        let docs_dir = lexical_normalize(&build.docs_dir);
        let site_dir = lexical_normalize(&build.site_dir);
        if site_dir == docs_dir {
            return Err(ResolveError::InvalidValue {
                key: root.key("site_dir"),
                value: build.site_dir.display().to_string(),
                reason: "site_dir must differ from docs_dir".to_string(),
            });
        }
        if docs_dir.starts_with(&site_dir) {
            return Err(ResolveError::InvalidValue {
                key: root.key("docs_dir"),
                value: build.docs_dir.display().to_string(),
                reason: "docs_dir must not be inside site_dir".to_string(),
            });
        }

        Ok(build)
    }

    /// Write every key that differs from its default.
    pub(crate) fn write_into(&self, doc: &mut ValueMap) {
        let defaults = Self::default();
        if self.docs_dir != defaults.docs_dir {
            doc.insert("docs_dir".into(), path_value(&self.docs_dir));
        }
        if self.site_dir != defaults.site_dir {
            doc.insert("site_dir".into(), path_value(&self.site_dir));
        }
        if self.use_directory_urls != defaults.use_directory_urls {
            doc.insert("use_directory_urls".into(), self.use_directory_urls.into());
        }
        if self.strict != defaults.strict {
            doc.insert("strict".into(), self.strict.into());
        }
        insert_list(doc, "extra_css", self.extra_css.iter().map(String::as_str));
        insert_list(doc, "extra_javascript", self.extra_javascript.iter().map(String::as_str));
        let watch: Vec<ConfigValue> = self.watch.iter().map(|p| path_value(p)).collect();
        if !watch.is_empty() {
            doc.insert("watch".into(), ConfigValue::List(watch));
        }
    }
}

fn dir_or(doc: &ValueMap, name: &str, default: PathBuf) -> Result<PathBuf, ResolveError> {
    let key = KeyPath::root(name);
    let Some(value) = lookup(doc, name) else {
        return Ok(default);
    };
    let dir = expect_str(value, &key)?;
    if dir.trim().is_empty() {
        return Err(ResolveError::InvalidValue {
            key,
            value: dir.to_string(),
            reason: "directory must not be empty".to_string(),
        });
    }
    Ok(PathBuf::from(dir))
}

fn path_value(path: &Path) -> ConfigValue {
    ConfigValue::String(path.to_string_lossy().into_owned())
}

fn insert_list<'a>(doc: &mut ValueMap, key: &str, items: impl Iterator<Item = &'a str>) {
    let items: Vec<ConfigValue> = items.map(ConfigValue::from).collect();
    if !items.is_empty() {
        doc.insert(key.into(), ConfigValue::List(items));
    }
}
