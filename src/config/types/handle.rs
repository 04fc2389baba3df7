//! Hot-reloadable site plan.
//!
//! Uses `arc-swap` for lock-free reads and atomic plan replacement. A new
//! plan is fully resolved before it is swapped in, so readers only ever see
//! a complete plan, either the old one or the new one. Reloads are
//! serialized, so the stored hash always belongs to the live plan.

use crate::config::{ConfigError, ConfigWarning, Document, resolve};
use crate::plan::SitePlan;
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Outcome of [`PlanHandle::reload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reload {
    /// Document content unchanged; nothing was resolved.
    Unchanged,
    /// A new plan is live; carries its warnings.
    Updated(Vec<ConfigWarning>),
}

/// Shared handle to the current plan of one document file.
#[derive(Debug)]
pub struct PlanHandle {
    path: PathBuf,
    plan: ArcSwap<SitePlan>,
    /// Hash of the document text the current plan was resolved from.
    hash: AtomicU64,
    /// Held for the whole of `reload`; readers never take it.
    reload_lock: Mutex<()>,
}

impl PlanHandle {
    /// Load and resolve `path`, returning the handle and the first warnings.
    pub fn open(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        let (plan, warnings, hash) = Self::resolve_file(path)?;
        let handle = Self {
            path: path.to_path_buf(),
            plan: ArcSwap::from_pointee(plan),
            hash: AtomicU64::new(hash),
            reload_lock: Mutex::new(()),
        };
        Ok((handle, warnings))
    }

    /// Current plan. Cheap; the returned `Arc` stays valid across reloads.
    #[inline]
    pub fn plan(&self) -> Arc<SitePlan> {
        self.plan.load_full()
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload the document if its content changed.
    ///
    /// On error the previous plan stays live and the next call retries.
    pub fn reload(&self) -> Result<Reload, ConfigError> {
        let _guard = self.reload_lock.lock();
        let text = std::fs::read_to_string(&self.path)
            .map_err(|err| ConfigError::Io(self.path.clone(), err))?;
        let new_hash = crate::utils::hash::compute(&text);
        if new_hash == self.hash.load(Ordering::Acquire) {
            return Ok(Reload::Unchanged);
        }

        let (plan, warnings) = Self::resolve_text(&self.path, &text)?;
        self.plan.store(Arc::new(plan));
        self.hash.store(new_hash, Ordering::Release);
        Ok(Reload::Updated(warnings))
    }

    fn resolve_file(path: &Path) -> Result<(SitePlan, Vec<ConfigWarning>, u64), ConfigError> {
        let text =
            std::fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let (plan, warnings) = Self::resolve_text(path, &text)?;
        Ok((plan, warnings, crate::utils::hash::compute(&text)))
    }

    fn resolve_text(path: &Path, text: &str) -> Result<(SitePlan, Vec<ConfigWarning>), ConfigError> {
        let format = crate::config::DocumentFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
        let resolved = resolve(&Document::parse(text, format)?)?;
        Ok((resolved.plan, resolved.warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write(path: &Path, text: &str) {
        fs::write(path, text).unwrap();
    }

    #[test]
    fn test_reload_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mkdocs.yml");
        write(&path, "site_name: One\ntheme: mkdocs\n");

        let (handle, warnings) = PlanHandle::open(&path).unwrap();
        assert!(warnings.is_empty());
        let first = handle.plan();
        assert_eq!(first.site.name, "One");

        // Same content: no re-resolution
        assert_eq!(handle.reload().unwrap(), Reload::Unchanged);
        assert!(Arc::ptr_eq(&first, &handle.plan()));

        write(&path, "site_name: Two\ntheme: mkdocs\nfoo: 1\n");
        let Reload::Updated(warnings) = handle.reload().unwrap() else {
            panic!("expected an updated plan");
        };
        assert_eq!(warnings.len(), 1);
        assert_eq!(handle.plan().site.name, "Two");
        // Readers holding the old plan are unaffected
        assert_eq!(first.site.name, "One");
    }

    #[test]
    fn test_failed_reload_keeps_plan() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mkdocs.yml");
        write(&path, "site_name: One\ntheme: mkdocs\n");
        let (handle, _) = PlanHandle::open(&path).unwrap();

        write(&path, "site_name: Two\ntheme: dracula\n");
        assert!(handle.reload().is_err());
        assert_eq!(handle.plan().site.name, "One");

        // Still failing content is re-checked, not cached as current
        assert!(handle.reload().is_err());

        write(&path, "site_name: Three\ntheme: mkdocs\n");
        assert!(matches!(handle.reload().unwrap(), Reload::Updated(_)));
        assert_eq!(handle.plan().site.name, "Three");
    }

    #[test]
    fn test_concurrent_reloads_update_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mkdocs.yml");
        write(&path, "site_name: One\ntheme: mkdocs\n");
        let (handle, _) = PlanHandle::open(&path).unwrap();

        write(&path, "site_name: Two\ntheme: mkdocs\n");
        let outcomes: Vec<Reload> = std::thread::scope(|s| {
            let workers: Vec<_> = (0..8).map(|_| s.spawn(|| handle.reload().unwrap())).collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });

        let updated = outcomes.iter().filter(|r| matches!(r, Reload::Updated(_))).count();
        assert_eq!(updated, 1);
        assert_eq!(handle.plan().site.name, "Two");
        assert_eq!(handle.reload().unwrap(), Reload::Unchanged);
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PlanHandle::open(&dir.path().join("mkdocs.yml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }
}
