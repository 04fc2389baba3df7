//! `repo_name`, `repo_url` and `edit_uri`.

use super::{insert_non_empty, validate_http_url};
use crate::config::section::string_or_empty;
use crate::config::{KeyPath, ResolveError, ValueMap};
use crate::utils::path::is_external_link;
use serde::Serialize;
use url::Url;

const PATH_PLACEHOLDER: &str = "{path}";

/// Source repository metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepoInfo {
    pub name: String,
    pub url: String,
    /// Edit link template, relative to `url` or absolute. May contain a
    /// `{path}` placeholder; otherwise the page path is appended.
    pub edit_uri: String,
}

impl RepoInfo {
    pub(crate) fn resolve(doc: &ValueMap) -> Result<Self, ResolveError> {
        let root = KeyPath::default();
        let mut url = string_or_empty(doc, &root, "repo_url")?;
        if !url.is_empty() {
            url = validate_http_url(url, &root.key("repo_url"))?;
        }
        Ok(Self {
            name: string_or_empty(doc, &root, "repo_name")?,
            url,
            edit_uri: string_or_empty(doc, &root, "edit_uri")?,
        })
    }

    pub(crate) fn write_into(&self, doc: &mut ValueMap) {
        insert_non_empty(doc, "repo_name", &self.name);
        insert_non_empty(doc, "repo_url", &self.url);
        insert_non_empty(doc, "edit_uri", &self.edit_uri);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.url.is_empty() && self.edit_uri.is_empty()
    }

    /// Edit link for a document path relative to `docs_dir`.
    ///
    /// `None` when no edit URI is configured, or when it is relative and
    /// there is no repository URL to resolve it against.
    pub fn edit_url(&self, path: &str) -> Option<String> {
        if self.edit_uri.is_empty() {
            return None;
        }

        let path = path.trim_start_matches('/');
        let uri = if self.edit_uri.contains(PATH_PLACEHOLDER) {
            self.edit_uri.replace(PATH_PLACEHOLDER, path)
        } else {
            format!("{}{path}", with_trailing_slash(&self.edit_uri))
        };

        if is_external_link(&uri) {
            return Some(uri);
        }
        if self.url.is_empty() {
            return None;
        }
        let base = Url::parse(&with_trailing_slash(&self.url)).ok()?;
        base.join(&uri).ok().map(String::from)
    }
}

fn with_trailing_slash(s: &str) -> String {
    if s.ends_with('/') {
        s.to_string()
    } else {
        format!("{s}/")
    }
}
