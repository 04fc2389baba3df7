//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find a config file by searching upward from `start`.
///
/// Walks up parent directories until `config_name` is found and returns the
/// path of the first match. An absolute `config_name` is returned as-is when
/// it exists.
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/  ← start
/// /home/user/site/mkdocs.yml   ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_config_upward() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let nested = root.join("docs/guide");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.join("mkdocs.yml"), "site_name: Docs\n").unwrap();

        let found = find_config_file(Path::new("mkdocs.yml"), &nested).unwrap();
        assert_eq!(found, root.join("mkdocs.yml"));
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        assert_eq!(find_config_file(&path, dir.path()), None);

        fs::write(&path, "site_name = \"Docs\"\n").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }

    #[test]
    fn test_directory_with_config_name_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("a/mkdocs.yml")).unwrap();
        fs::write(root.join("mkdocs.yml"), "").unwrap();

        let found = find_config_file(Path::new("mkdocs.yml"), &root.join("a")).unwrap();
        assert_eq!(found, root.join("mkdocs.yml"));
    }
}
