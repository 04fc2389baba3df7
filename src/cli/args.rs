//! Command-line interface definitions.

use docplan::config::DEFAULT_CONFIG_NAME;
use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Validate, inspect and hot-reload documentation site configuration
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG_NAME, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve the config and check nav targets against the docs directory
    #[command(visible_alias = "c")]
    Check {
        /// Fail on warnings and missing nav targets (also `strict: true`)
        #[arg(short, long)]
        strict: bool,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Print the resolved site plan
    #[command(visible_alias = "p")]
    Plan {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = PlanFormat::Json)]
        format: PlanFormat,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Print the navigation tree (generated from the docs directory without `nav`)
    #[command(visible_alias = "n")]
    Nav {
        /// Print leaves only, one per line
        #[arg(short, long)]
        flat: bool,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Reload the plan whenever the config or docs change
    #[command(visible_alias = "w")]
    Watch {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Write a starter config and docs/index.md
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(short, long)]
        dry: bool,

        #[command(flatten)]
        common: CommonArgs,
    },
}

/// Arguments shared by every subcommand.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// `plan` output format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFormat {
    /// Structural JSON form
    Json,
    /// Canonical config document
    Yaml,
}

impl Cli {
    pub const fn common(&self) -> &CommonArgs {
        match &self.command {
            Commands::Check { common, .. }
            | Commands::Plan { common, .. }
            | Commands::Nav { common, .. }
            | Commands::Watch { common }
            | Commands::Init { common, .. } => common,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_plan_args() {
        let cli = Cli::parse_from(["docplan", "-C", "site.yml", "plan", "--format", "yaml", "-V"]);
        assert_eq!(cli.config, PathBuf::from("site.yml"));
        assert!(cli.common().verbose);
        assert!(matches!(
            cli.command,
            Commands::Plan { format: PlanFormat::Yaml, output: None, .. }
        ));
    }

    #[test]
    fn test_default_config_name() {
        let cli = Cli::parse_from(["docplan", "check", "--strict"]);
        assert_eq!(cli.config, PathBuf::from("mkdocs.yml"));
        assert!(matches!(cli.command, Commands::Check { strict: true, .. }));
    }
}
