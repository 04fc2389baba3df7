//! Configuration file generation.
//!
//! Creates the starter config document and ignore files for new sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Generate a starter config document with comments
pub fn generate_config_template(site_name: &str) -> String {
    // A JSON string is a valid double-quoted YAML scalar.
    let name = serde_json::to_string(site_name).unwrap_or_else(|_| "\"My Docs\"".to_string());
    format!(
        "# docplan configuration (v{version})

site_name: {name}
# site_url: https://example.com/
# repo_url: https://github.com/example/project

theme:
  name: material
  features:
    - navigation.instant
    - navigation.sections
    - search.highlight
    - content.code.copy

markdown_extensions:
  - admonition
  - toc:
      permalink: true
  - pymdownx.superfences

plugins:
  - search

nav:
  - Home: index.md
",
        version = env!("CARGO_PKG_VERSION"),
    )
}

/// Write the starter config document, named `config_name`
pub fn write_config(root: &Path, config_name: &Path, site_name: &str) -> Result<()> {
    let content = generate_config_template(site_name);

    let path = root.join(config_name);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write ignore files with the default `site_dir` and OS noise
pub fn write_ignore_files(root: &Path) -> Result<()> {
    let content = ["/site/", ".DS_Store"].join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
