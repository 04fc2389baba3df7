//! Site initialization module.
//!
//! Creates a new site with a starter config document.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`structure`]: Directory structure creation
//! - [`config`]: Configuration file generation

mod config;
mod structure;
mod validate;

use anyhow::{Context, Result};
use docplan::log;
use std::path::Path;

use validate::InitMode;

/// Create a new site with default structure
///
/// # Steps
/// 1. Validate target directory
/// 2. Create `docs/` with a home page
/// 3. Write the config document and ignore files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(config_name: &Path, name: Option<&Path>, dry_run: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    };
    let site_name = default_site_name(&root);

    if dry_run {
        print!("{}", config::generate_config_template(&site_name));
        return Ok(());
    }

    init_at(&root, config_name, mode, &site_name)?;
    log!("init"; "Site initialized in {}", root.display());
    Ok(())
}

fn init_at(root: &Path, config_name: &Path, mode: InitMode, site_name: &str) -> Result<()> {
    validate::validate_target(root, config_name, mode)?;
    structure::create_structure(root)?;
    config::write_config(root, config_name, site_name)?;
    config::write_ignore_files(root)
}

/// Site name derived from the directory: `my-docs` -> `My docs`.
fn default_site_name(root: &Path) -> String {
    let dir = root
        .file_name()
        .map(|name| name.to_string_lossy().replace(['-', '_'], " "))
        .unwrap_or_default();
    let mut chars = dir.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "My Docs".to_string(),
    }
}
