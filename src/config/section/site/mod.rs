//! Site metadata keys.
//!
//! # Example
//!
//! ```yaml
//! site_name: Acme Docs
//! site_author: Alice
//! site_description: Documentation for the Acme toolkit
//! site_url: https://docs.acme.dev/
//! copyright: Copyright &copy; 2024 Acme
//!
//! repo_name: acme/toolkit
//! repo_url: https://github.com/acme/toolkit
//! edit_uri: edit/main/docs/
//!
//! extra:
//!   social:
//!     - icon: fontawesome/brands/github
//!       link: https://github.com/acme
//!   analytics_id: G-1234
//! ```

mod extra;
mod repo;

pub use extra::{ExtraConfig, SocialLink};
pub use repo::RepoInfo;

use super::{expect_str, lookup, optional_string, string_or_empty};
use crate::config::{ConfigValue, KeyPath, ResolveError, ValueMap};
use serde::Serialize;

/// Site identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteInfo {
    pub name: String,
    pub author: String,
    pub description: String,
    /// Canonical URL of the built site.
    pub url: Option<String>,
    pub copyright: String,
}

impl SiteInfo {
    pub(crate) fn resolve(doc: &ValueMap) -> Result<Self, ResolveError> {
        let root = KeyPath::default();
        let name_key = root.key("site_name");
        let name = lookup(doc, "site_name").ok_or_else(|| ResolveError::missing(name_key.clone()))?;
        let name = expect_str(name, &name_key)?;
        if name.trim().is_empty() {
            return Err(ResolveError::InvalidValue {
                key: name_key,
                value: name.to_string(),
                reason: "site name must not be empty".to_string(),
            });
        }

        let url = optional_string(doc, &root, "site_url")?
            .filter(|url| !url.is_empty())
            .map(|url| validate_http_url(url, &root.key("site_url")))
            .transpose()?;

        Ok(Self {
            name: name.to_string(),
            author: string_or_empty(doc, &root, "site_author")?,
            description: string_or_empty(doc, &root, "site_description")?,
            url,
            copyright: string_or_empty(doc, &root, "copyright")?,
        })
    }

    pub(crate) fn write_into(&self, doc: &mut ValueMap) {
        doc.insert("site_name".into(), self.name.as_str().into());
        insert_non_empty(doc, "site_author", &self.author);
        insert_non_empty(doc, "site_description", &self.description);
        if let Some(url) = &self.url {
            doc.insert("site_url".into(), url.as_str().into());
        }
        insert_non_empty(doc, "copyright", &self.copyright);
    }
}

pub(crate) fn insert_non_empty(doc: &mut ValueMap, key: &str, value: &str) {
    if !value.is_empty() {
        doc.insert(key.into(), ConfigValue::from(value));
    }
}

/// Check that `value` is an absolute http(s) URL with a host.
pub(crate) fn validate_http_url(value: String, key: &KeyPath) -> Result<String, ResolveError> {
    let invalid = |reason: String| ResolveError::InvalidValue {
        key: key.clone(),
        value: value.clone(),
        reason,
    };

    let parsed = url::Url::parse(&value).map_err(|e| invalid(format!("invalid URL: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "scheme `{}` not supported, must be http or https",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("URL must have a valid host".to_string()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> ValueMap {
        let value: ConfigValue = serde_yaml::from_str(text).unwrap();
        value.as_map().cloned().unwrap()
    }

    #[test]
    fn test_defaults() {
        let site = SiteInfo::resolve(&doc("site_name: Docs")).unwrap();
        assert_eq!(site.name, "Docs");
        assert_eq!(site.author, "");
        assert_eq!(site.description, "");
        assert_eq!(site.copyright, "");
        assert_eq!(site.url, None);
    }

    #[test]
    fn test_missing_site_name() {
        let err = SiteInfo::resolve(&doc("site_author: Alice")).unwrap_err();
        assert_eq!(err, ResolveError::missing(KeyPath::root("site_name")));

        let err = SiteInfo::resolve(&doc("site_name:")).unwrap_err();
        assert!(matches!(err, ResolveError::MissingRequiredKey { .. }));

        let err = SiteInfo::resolve(&doc("site_name: [a]")).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidType { expected: "string", found: "list", .. }));

        let err = SiteInfo::resolve(&doc("site_name: '  '")).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidValue { .. }));
    }

    #[test]
    fn test_site_url_validation() {
        let site = SiteInfo::resolve(&doc("site_name: Docs\nsite_url: https://docs.acme.dev/")).unwrap();
        assert_eq!(site.url.as_deref(), Some("https://docs.acme.dev/"));

        for url in ["ftp://docs.acme.dev", "not a url", "docs.acme.dev"] {
            let err = SiteInfo::resolve(&doc(&format!("site_name: Docs\nsite_url: '{url}'"))).unwrap_err();
            assert_eq!(err.key().as_str(), "site_url");
            assert_eq!(err.value(), Some(url));
        }
    }
}
