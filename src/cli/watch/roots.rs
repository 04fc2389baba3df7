use std::path::{Path, PathBuf};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;

use docplan::docs::docs_root;
use docplan::plan::SitePlan;
use docplan::utils::path::{expand_home, normalize_path};

/// Watch-root consistency manager.
///
/// - Attach existing roots at startup
/// - Re-attach roots that were removed and recreated
/// - Follow the plan when a reload moves `docs_dir` or `watch`
pub(super) struct WatchRoots {
    desired: Vec<(PathBuf, RecursiveMode)>,
    attached: FxHashSet<PathBuf>,
}

impl WatchRoots {
    pub(super) fn new() -> Self {
        Self {
            desired: Vec::new(),
            attached: FxHashSet::default(),
        }
    }

    /// Replace the desired roots with those of `plan`.
    ///
    /// The config's own directory is watched non-recursively; editors often
    /// replace the file instead of writing it in place.
    pub(super) fn update(&mut self, watcher: &mut RecommendedWatcher, plan: &SitePlan, config: &Path) {
        let desired = desired_roots(plan, config);
        for (path, _) in &self.desired {
            if !desired.iter().any(|(p, _)| p == path) && self.attached.remove(path) {
                let _ = watcher.unwatch(path);
            }
        }
        self.desired = desired;
        self.maintain(watcher);
    }

    pub(super) fn maintain(&mut self, watcher: &mut RecommendedWatcher) {
        // Drop stale handles for roots that no longer exist.
        self.attached.retain(|path| path.exists());

        for (path, mode) in &self.desired {
            if self.attached.contains(path) || !path.exists() {
                continue;
            }

            if watcher.watch(path, *mode).is_ok() {
                self.attached.insert(path.clone());
                docplan::debug!("watch"; "watching {}", path.display());
            }
        }
    }
}

fn desired_roots(plan: &SitePlan, config: &Path) -> Vec<(PathBuf, RecursiveMode)> {
    let base = config.parent().unwrap_or(Path::new("."));
    let mut roots = vec![
        (normalize_path(base), RecursiveMode::NonRecursive),
        (docs_root(plan, config), RecursiveMode::Recursive),
    ];
    for extra in &plan.build.watch {
        let path = normalize_path(&base.join(expand_home(extra)));
        if !roots.iter().any(|(p, _)| *p == path) {
            roots.push((path, RecursiveMode::Recursive));
        }
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use docplan::config::{Document, resolve};

    #[test]
    fn test_desired_roots() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let config = root.join("mkdocs.yml");
        let doc = "site_name: Docs\ntheme: mkdocs\nwatch:\n  - overrides\n  - docs\n";
        let plan = resolve(&Document::from_yaml(doc).unwrap()).unwrap().plan;

        let roots = desired_roots(&plan, &config);
        let base = root.as_path();
        assert_eq!(roots.len(), 3);
        assert_eq!(roots[0], (base.to_path_buf(), RecursiveMode::NonRecursive));
        assert_eq!(roots[1], (base.join("docs"), RecursiveMode::Recursive));
        assert_eq!(roots[2], (base.join("overrides"), RecursiveMode::Recursive));
    }
}
