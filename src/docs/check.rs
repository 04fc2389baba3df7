//! Declared navigation vs. files on disk.

use super::collect_docs;
use crate::plan::SitePlan;
use crate::utils::path::{lexical_normalize, split_path_fragment, to_slash};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::io;
use std::path::{Component, Path};

/// Result of [`check_nav`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavReport {
    /// Page leaves of `nav` with no file behind them, in nav order.
    pub missing: Vec<String>,
    /// Documents on disk that `nav` never references, sorted.
    pub unlisted: Vec<String>,
}

impl NavReport {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unlisted.is_empty()
    }
}

/// Compare the plan's navigation with the documents under `docs_dir`.
///
/// A generated (`Auto`) navigation lists every document by construction,
/// so only declared trees can report anything.
pub fn check_nav(plan: &SitePlan, docs_dir: &Path) -> io::Result<NavReport> {
    let docs = collect_docs(docs_dir)?;
    if plan.nav.is_auto() {
        return Ok(NavReport::default());
    }

    let mut listed = FxHashSet::default();
    let mut missing = Vec::new();
    for page in plan.nav.pages() {
        let (path, _) = split_path_fragment(page);
        let path = lexical_normalize(Path::new(path.trim_start_matches('/')));
        // Leaves pointing outside the docs tree never count as present.
        if matches!(path.components().next(), Some(Component::ParentDir) | None) {
            missing.push(page.to_string());
            continue;
        }
        let path = to_slash(&path);
        if !docs_dir.join(&path).is_file() && !listed.contains(&path) {
            missing.push(page.to_string());
        }
        listed.insert(path);
    }

    let unlisted = docs
        .into_iter()
        .filter(|doc| !listed.contains(doc.as_str()))
        .collect();
    Ok(NavReport { missing, unlisted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Document, resolve};
    use std::fs;

    fn plan(nav: &str) -> SitePlan {
        let text = format!("site_name: Docs\ntheme: mkdocs\n{nav}");
        resolve(&Document::from_yaml(&text).unwrap()).unwrap().plan
    }

    fn docs(paths: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for path in paths {
            let full = dir.path().join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(full, "# page\n").unwrap();
        }
        dir
    }

    #[test]
    fn test_missing_and_unlisted() {
        let dir = docs(&["index.md", "guide/install.md", "changelog.md"]);
        let plan = plan(
            "nav:\n  - Home: index.md\n  - Guide:\n      - guide/install.md\n      - guide/usage.md#setup\n  - Repo: https://github.com/acme/toolkit",
        );
        let report = check_nav(&plan, dir.path()).unwrap();
        assert_eq!(report.missing, ["guide/usage.md#setup"]);
        assert_eq!(report.unlisted, ["changelog.md"]);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_clean_report() {
        let dir = docs(&["index.md", "about.md"]);
        let plan = plan("nav:\n  - ./index.md\n  - About: about.md\n  - Again: about.md");
        let report = check_nav(&plan, dir.path()).unwrap();
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn test_leaf_outside_docs_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let docs = dir.path().join("docs");
        fs::create_dir(&docs).unwrap();
        fs::write(dir.path().join("secret.md"), "# secret\n").unwrap();
        fs::write(docs.join("index.md"), "# home\n").unwrap();

        let plan = plan("nav:\n  - ../secret.md\n  - guide/../index.md");
        let report = check_nav(&plan, &docs).unwrap();
        assert_eq!(report.missing, ["../secret.md"]);
        assert!(report.unlisted.is_empty());
    }

    #[test]
    fn test_auto_nav_is_always_clean() {
        let dir = docs(&["index.md", "other.md"]);
        assert!(check_nav(&plan(""), dir.path()).unwrap().is_clean());
    }
}
