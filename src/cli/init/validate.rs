//! Pre-initialization validation.
//!
//! Validates target directory state before site creation.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `docplan init` - initialize in current directory (no config yet)
    CurrentDir,
    /// `docplan init <name>` - create new subdirectory (must not exist)
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: no config file and no non-empty docs directory yet
/// - `NewDir`: directory must not exist
pub fn validate_target(root: &Path, config_name: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if root.join(config_name).exists() {
                bail!(
                    "'{}' already exists in the current directory.\n\
                     Use `docplan init <name>` to create a site in a new subdirectory.",
                    config_name.display()
                );
            }
            if !is_empty(&root.join("docs"))? {
                bail!(
                    "Directory 'docs' is not empty.\n\
                     Use `docplan init <name>` to create a site in a new subdirectory."
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

/// Check if directory is empty or doesn't exist.
fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let is_empty = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory '{}'", path.display()))?
        .next()
        .is_none();
    Ok(is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CONFIG: &str = "mkdocs.yml";

    #[test]
    fn test_empty_dir_current_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), Path::new(CONFIG), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_unrelated_files_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "content").unwrap();
        assert!(validate_target(temp.path(), Path::new(CONFIG), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_existing_config_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG), "site_name: Docs\n").unwrap();
        assert!(validate_target(temp.path(), Path::new(CONFIG), InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_non_empty_docs_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/index.md"), "# Home\n").unwrap();
        assert!(validate_target(temp.path(), Path::new(CONFIG), InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), Path::new(CONFIG), InitMode::NewDir).is_err());
    }

    #[test]
    fn test_non_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        let new_path = temp.path().join("new_site");
        assert!(validate_target(&new_path, Path::new(CONFIG), InitMode::NewDir).is_ok());
    }
}
