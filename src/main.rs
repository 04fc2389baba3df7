//! docplan - check, print and hot-reload documentation site plans.

mod cli;
mod core;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    docplan::logger::set_verbose(cli.common().verbose);

    match &cli.command {
        Commands::Check { strict, .. } => cli::check::run_check(&cli.config, *strict),
        Commands::Plan { format, output, .. } => {
            cli::plan::run_plan(&cli.config, *format, output.as_deref())
        }
        Commands::Nav { flat, .. } => cli::nav::run_nav(&cli.config, *flat),
        Commands::Watch { .. } => cli::watch::run_watch(&cli.config),
        Commands::Init { name, dry, .. } => cli::init::new_site(&cli.config, name.as_deref(), *dry),
    }
}
