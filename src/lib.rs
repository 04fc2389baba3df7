//! docplan - resolve documentation-site configuration into a site plan.
//!
//! ```no_run
//! let resolved = docplan::config::load(std::path::Path::new("mkdocs.yml"))?;
//! println!("{}", resolved.plan.to_json()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! - [`config`]: documents, resolution, errors, hot reload
//! - [`plan`]: the resolved [`plan::SitePlan`]
//! - [`docs`]: docs-directory scans and nav checks (performs I/O)

pub mod config;
pub mod docs;
pub mod logger;
pub mod plan;
pub mod utils;
