//! Site directory structure creation.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Directories of a new site.
const SITE_DIRS: &[&str] = &["docs"];

/// Starter home page.
const INDEX_MD: &str = "# Welcome

This page lives in `docs/index.md`.

## Commands

* `docplan check` - Check the config and its navigation.
* `docplan plan` - Print the resolved site plan.
* `docplan watch` - Reload the plan while you edit.
";

/// Create site directory structure at the given root.
///
/// The root directory is created if it doesn't exist. An existing
/// `docs/index.md` is left alone.
pub fn create_structure(root: &Path) -> Result<()> {
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create root directory '{}'", root.display()))?;
    }

    for dir in SITE_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }

    let index = root.join("docs/index.md");
    if !index.exists() {
        fs::write(&index, INDEX_MD)
            .with_context(|| format!("Failed to write '{}'", index.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_structure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my_site");

        create_structure(&root).unwrap();

        assert!(root.join("docs").is_dir());
        assert!(root.join("docs/index.md").is_file());
    }

    #[test]
    fn test_existing_index_kept() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/index.md"), "custom").unwrap();

        create_structure(temp.path()).unwrap();

        assert_eq!(fs::read_to_string(temp.path().join("docs/index.md")).unwrap(), "custom");
    }
}
