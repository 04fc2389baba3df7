//! Configuration utility types.
//!
//! | Module    | Purpose                                    |
//! |-----------|--------------------------------------------|
//! | `error`   | Resolve and load error types               |
//! | `handle`  | Hot-reloadable plan handle (lock-free)     |
//! | `key`     | Key paths for diagnostics                  |
//! | `warning` | Non-fatal findings                         |

mod error;
pub mod handle;
mod key;
pub mod warning;

pub use error::{ConfigError, ResolveError};
pub use handle::{PlanHandle, Reload};
pub use key::KeyPath;
pub use warning::ConfigWarning;
