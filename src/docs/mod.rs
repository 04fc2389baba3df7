//! Docs directory helpers.
//!
//! Everything here touches the filesystem and is kept apart from
//! [`crate::config::resolve`], which stays pure:
//!
//! - [`scan_docs`]: build a navigation tree from the docs directory, used
//!   when the document has no `nav`.
//! - [`check_nav`]: compare a declared `nav` against the files on disk.

mod check;
mod scan;

pub use check::{NavReport, check_nav};
pub use scan::{collect_docs, scan_docs};

use crate::plan::SitePlan;
use crate::utils::path::{expand_home, normalize_path};
use std::path::{Path, PathBuf};

/// Absolute docs directory of `plan`, relative to the document at
/// `config_path`. A leading `~` is expanded.
pub fn docs_root(plan: &SitePlan, config_path: &Path) -> PathBuf {
    let docs_dir = expand_home(&plan.build.docs_dir);
    let root = config_path.parent().unwrap_or(Path::new("."));
    normalize_path(&root.join(docs_dir))
}

/// Whether `path` names a markdown document.
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}
