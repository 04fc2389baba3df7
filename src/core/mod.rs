//! Process-wide state shared by the CLI commands.

mod state;

pub use state::{is_shutdown, set_watching, setup_shutdown_handler};
