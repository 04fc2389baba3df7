//! Path and URL utilities.
//!
//! - [`fs`]: Filesystem paths (`normalize_path`, `expand_home`, `lexical_normalize`, `to_slash`)
//! - [`route`]: Link utilities (`is_external_link`, `split_path_fragment`)

pub mod fs;
pub mod route;

pub use fs::{expand_home, lexical_normalize, normalize_path, to_slash};
pub use route::{is_external_link, split_path_fragment};
