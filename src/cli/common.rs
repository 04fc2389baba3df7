//! Common utilities shared across CLI commands.

use anyhow::{Context, Result, bail};
use docplan::config::{ConfigWarning, find_config_file};
use docplan::log;
use docplan::utils::plural::plural_count;
use std::path::{Path, PathBuf};

/// Locate the config document named by `-C`, searching upward from the
/// current directory.
pub fn locate_config(config: &Path) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    match find_config_file(config, &cwd) {
        Some(path) => Ok(path),
        None => bail!(
            "Config file '{}' not found in '{}' or any parent directory.\n\
             Run `docplan init` to create one.",
            config.display(),
            cwd.display()
        ),
    }
}

/// Display name of a config path, for log lines.
pub fn source_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

/// Print warnings and a one-line summary.
pub fn report_warnings(warnings: &[ConfigWarning], source: &str) {
    if warnings.is_empty() {
        return;
    }
    docplan::config::types::warning::report(warnings, source);
    log!("check"; "{} in {}", plural_count(warnings.len(), "warning"), source);
}
