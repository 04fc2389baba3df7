//! `check` command: resolve the document and compare `nav` with the docs.

use super::common::{locate_config, report_warnings, source_name};
use anyhow::{Context, Result, bail};
use docplan::config::load;
use docplan::docs::{check_nav, docs_root};
use docplan::log;
use docplan::utils::plural::plural_count;
use std::path::Path;

/// Run the check. Strict mode (flag or `strict: true`) turns warnings and
/// missing nav targets into a failure.
pub fn run_check(config: &Path, strict: bool) -> Result<()> {
    let path = locate_config(config)?;
    let source = source_name(&path);
    let resolved = load(&path).with_context(|| format!("Failed to resolve '{}'", path.display()))?;
    let plan = resolved.plan;
    let strict = strict || plan.build.strict;

    report_warnings(&resolved.warnings, &source);

    let docs_dir = docs_root(&plan, &path);
    let report = check_nav(&plan, &docs_dir)
        .with_context(|| format!("Failed to scan docs in '{}'", docs_dir.display()))?;

    for page in &report.missing {
        log!("warning"; "nav references `{}`, which is not in the docs directory", page);
    }
    for doc in &report.unlisted {
        log!("hint"; "`{}` exists but is not included in `nav`", doc);
    }

    log!(
        "check";
        "{}: {}, {}, {}",
        plan.site_name(),
        plural_count(plan.plugins.len(), "plugin"),
        plural_count(plan.markdown_extensions.len(), "extension"),
        plural_count(plan.nav.flatten().len(), "nav item"),
    );

    if strict && (!resolved.warnings.is_empty() || !report.missing.is_empty()) {
        bail!(
            "Aborted in strict mode: {}, {}",
            plural_count(resolved.warnings.len(), "warning"),
            plural_count(report.missing.len(), "missing nav target"),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site(config: &str, docs: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("mkdocs.yml"), config).unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        for doc in docs {
            fs::write(dir.path().join("docs").join(doc), "# page\n").unwrap();
        }
        dir
    }

    #[test]
    fn test_check_clean_site() {
        let dir = site("site_name: Docs\ntheme: mkdocs\nnav:\n  - index.md\n", &["index.md"]);
        run_check(&dir.path().join("mkdocs.yml"), true).unwrap();
    }

    #[test]
    fn test_missing_target_is_fatal_only_when_strict() {
        let config = "site_name: Docs\ntheme: mkdocs\nnav:\n  - index.md\n  - gone.md\n";
        let dir = site(config, &["index.md"]);
        let path = dir.path().join("mkdocs.yml");
        run_check(&path, false).unwrap();
        assert!(run_check(&path, true).is_err());
    }

    #[test]
    fn test_strict_from_document() {
        let config = "site_name: Docs\ntheme: mkdocs\nstrict: true\nunknown_key: 1\n";
        let dir = site(config, &["index.md"]);
        let err = run_check(&dir.path().join("mkdocs.yml"), false).unwrap_err();
        assert!(err.to_string().contains("1 warning"));
    }

    #[test]
    fn test_resolve_error_is_reported() {
        let dir = site("theme: mkdocs\n", &[]);
        let err = run_check(&dir.path().join("mkdocs.yml"), false).unwrap_err();
        assert!(format!("{err:#}").contains("site_name"));
    }
}
