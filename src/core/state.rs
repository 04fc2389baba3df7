//! Shutdown tracking for watch mode.
//!
//! Two flags:
//! - `WATCHING`: Is a watch loop running? (it polls for shutdown itself)
//! - `SHUTDOWN`: Has shutdown been requested? (Ctrl+C received)

use std::sync::atomic::{AtomicBool, Ordering};

/// Watch loop is running
/// - `false`: Ctrl+C exits immediately
/// - `true`: Ctrl+C sets `SHUTDOWN` and the loop returns on its next tick
static WATCHING: AtomicBool = AtomicBool::new(false);

/// Shutdown has been requested (Ctrl+C received)
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

// =============================================================================
// WATCHING state
// =============================================================================

/// Mark whether a watch loop owns shutdown handling
pub fn set_watching(watching: bool) {
    WATCHING.store(watching, Ordering::SeqCst);
}

fn is_watching() -> bool {
    WATCHING.load(Ordering::SeqCst)
}

// =============================================================================
// SHUTDOWN state
// =============================================================================

/// Setup the global Ctrl+C handler. Call once at program start
///
/// - Outside watch mode: exit immediately, nothing to wind down
/// - In watch mode: set `SHUTDOWN`, the loop drops its watcher and returns
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        SHUTDOWN.store(true, Ordering::SeqCst);
        if is_watching() {
            docplan::log!("watch"; "shutting down...");
        } else {
            std::process::exit(0);
        }
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Check if shutdown has been requested
///
/// Relaxed ordering: the watch loop re-checks on every tick
pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watching() {
        set_watching(true);
        assert!(is_watching());

        set_watching(false);
        assert!(!is_watching());
    }

    #[test]
    fn test_shutdown_starts_unset() {
        assert!(!is_shutdown());
    }
}
