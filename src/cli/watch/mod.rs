//! `watch` command: hot-reload the plan on file changes.
//!
//! ```text
//! notify → Debouncer (timing, dedup) → classify → PlanHandle::reload / check_nav
//! ```
//!
//! A failed reload keeps the previous plan live; the next change retries.

mod debouncer;
mod roots;

use super::common::{locate_config, report_warnings, source_name};
use crate::core::{is_shutdown, set_watching};
use anyhow::{Context, Result};
use debouncer::{ChangeKind, Debouncer};
use docplan::config::{PlanHandle, Reload};
use docplan::docs::{check_nav, docs_root};
use docplan::logger::{status_detach, status_error, status_success, status_unchanged, status_warning};
use docplan::utils::path::normalize_path;
use docplan::utils::plural::plural_count;
use docplan::{debug, log};
use notify::RecommendedWatcher;
use roots::WatchRoots;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

/// Upper bound on one wait, so Ctrl+C is noticed promptly.
const TICK: Duration = Duration::from_millis(200);

pub fn run_watch(config: &Path) -> Result<()> {
    let path = normalize_path(&locate_config(config)?);
    let source = source_name(&path);
    let (handle, warnings) = PlanHandle::open(&path)
        .with_context(|| format!("Failed to resolve '{}'", path.display()))?;
    report_warnings(&warnings, &source);

    // Watcher first: events buffer in the channel while the docs are checked.
    let (notify_tx, notify_rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        let _ = notify_tx.send(res);
    })
    .context("Failed to start file watcher")?;
    let mut roots = WatchRoots::new();
    roots.update(&mut watcher, &handle.plan(), &path);

    log!("watch"; "watching {} and its docs (Ctrl+C to stop)", source);
    check_docs(&handle);

    set_watching(true);
    let mut debouncer = Debouncer::new();
    while !is_shutdown() {
        match notify_rx.recv_timeout(debouncer.sleep_duration(TICK)) {
            Ok(Ok(event)) => debouncer.add_event(&event),
            Ok(Err(e)) => log!("watch"; "notify error: {}", e),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        roots.maintain(&mut watcher);
        if let Some(changes) = debouncer.take_if_ready() {
            process_changes(&handle, &changes, &mut roots, &mut watcher, &source);
        }
    }
    set_watching(false);
    Ok(())
}

/// Reload the plan and/or re-check the docs for one debounced batch.
fn process_changes(
    handle: &PlanHandle,
    changes: &FxHashMap<PathBuf, ChangeKind>,
    roots: &mut WatchRoots,
    watcher: &mut RecommendedWatcher,
    source: &str,
) {
    let docs_dir = docs_root(&handle.plan(), handle.path());
    let batch = classify(changes, handle.path(), &docs_dir);
    debug!("watch"; "batch: config={} docs={}", batch.config, batch.docs);

    if batch.config {
        match handle.reload() {
            Ok(Reload::Unchanged) => status_unchanged(&format!("{source} unchanged")),
            Ok(Reload::Updated(warnings)) => {
                roots.update(watcher, &handle.plan(), handle.path());
                status_success(&format!("{source} reloaded"));
                if !warnings.is_empty() {
                    report_warnings(&warnings, source);
                    status_detach();
                }
                check_docs(handle);
            }
            Err(e) => status_error("reload failed, keeping previous plan", &e.to_string()),
        }
    } else if batch.docs > 0 {
        status_success(&format!("{} changed", plural_count(batch.docs, "document")));
        check_docs(handle);
    }
}

/// Report nav targets missing from the docs directory.
fn check_docs(handle: &PlanHandle) {
    let plan = handle.plan();
    let docs_dir = docs_root(&plan, handle.path());
    match check_nav(&plan, &docs_dir) {
        Ok(report) if report.missing.is_empty() => {}
        Ok(report) => {
            let detail = report
                .missing
                .iter()
                .map(|page| format!("  nav target `{page}` not found"))
                .collect::<Vec<_>>()
                .join("\n");
            status_warning(&detail);
            status_detach();
        }
        Err(e) => {
            status_warning(&format!("cannot scan {}: {}", docs_dir.display(), e));
            status_detach();
        }
    }
}

/// What a batch of changes touched.
#[derive(Debug, Default, PartialEq, Eq)]
struct Batch {
    config: bool,
    /// Changed documents (or other watched files).
    docs: usize,
}

fn classify(changes: &FxHashMap<PathBuf, ChangeKind>, config: &Path, docs_dir: &Path) -> Batch {
    let mut batch = Batch::default();
    for path in changes.keys() {
        if path == config {
            batch.config = true;
        } else if path.starts_with(docs_dir) || path.parent() != config.parent() {
            // Other files next to the config are not watched content.
            batch.docs += 1;
        }
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        let config = Path::new("/site/mkdocs.yml");
        let docs = Path::new("/site/docs");
        let mut changes = FxHashMap::default();
        changes.insert(PathBuf::from("/site/docs/index.md"), ChangeKind::Modified);
        changes.insert(PathBuf::from("/site/docs/guide/new.md"), ChangeKind::Created);
        changes.insert(PathBuf::from("/site/README.md"), ChangeKind::Modified);
        assert_eq!(classify(&changes, config, docs), Batch { config: false, docs: 2 });

        changes.insert(PathBuf::from("/site/mkdocs.yml"), ChangeKind::Modified);
        assert_eq!(classify(&changes, config, docs), Batch { config: true, docs: 2 });
    }

    #[test]
    fn test_process_changes_keeps_plan_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().canonicalize().unwrap().join("mkdocs.yml");
        std::fs::write(&config, "site_name: One\ntheme: mkdocs\n").unwrap();
        let (handle, _) = PlanHandle::open(&config).unwrap();

        let mut watcher = notify::recommended_watcher(|_: notify::Result<notify::Event>| {}).unwrap();
        let mut roots = WatchRoots::new();
        let mut changes = FxHashMap::default();
        changes.insert(config.clone(), ChangeKind::Modified);

        std::fs::write(&config, "site_name: Two\ntheme: nope\n").unwrap();
        process_changes(&handle, &changes, &mut roots, &mut watcher, "mkdocs.yml");
        assert_eq!(handle.plan().site.name, "One");

        std::fs::write(&config, "site_name: Two\ntheme: mkdocs\n").unwrap();
        process_changes(&handle, &changes, &mut roots, &mut watcher, "mkdocs.yml");
        assert_eq!(handle.plan().site.name, "Two");
    }
}
