//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::detection::DatabaseDep;

/// Skyforge - Infrastructure synthesis for detected applications.
#[derive(Debug, Parser)]
#[command(name = "skyforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides the discovered config files)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Answer prompts from defaults and SKYFORGE_PROMPT_* variables
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Synthesize an infrastructure spec from detection results
    Synth(SynthArgs),

    /// Manage deployment environments
    #[command(subcommand)]
    Env(EnvCommands),

    /// Print a JSON schema
    Schema(SchemaArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `synth` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SynthArgs {
    /// Detection manifest (YAML, or JSON with a .json extension)
    #[arg(short, long, value_name = "FILE")]
    pub detection: PathBuf,

    /// Leave a detected database kind out of the spec (repeatable)
    #[arg(long = "skip-db", value_name = "KIND")]
    pub skip_db: Vec<DatabaseDep>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Write the spec to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

/// `env` subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum EnvCommands {
    /// Make sure the environment has a subscription and a location
    Ensure(EnvEnsureArgs),

    /// Print the environment's values
    Show(EnvShowArgs),
}

/// Arguments for `env ensure`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvEnsureArgs {
    /// Environment name (defaults to the configured environment)
    #[arg(short, long, value_name = "NAME")]
    pub env: Option<String>,

    /// Account profile to read subscriptions and locations from
    #[arg(short, long, value_name = "FILE")]
    pub account: Option<PathBuf>,
}

/// Arguments for `env show`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvShowArgs {
    /// Environment name (defaults to the configured environment)
    #[arg(short, long, value_name = "NAME")]
    pub env: Option<String>,
}

/// Which schema to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SchemaTarget {
    /// The synthesized infrastructure spec
    #[default]
    Infra,
    /// The detection manifest
    Detection,
    /// The configuration file
    Config,
    /// The account profile
    Account,
}

/// Arguments for the `schema` command.
#[derive(Debug, Clone, clap::Args)]
pub struct SchemaArgs {
    /// Schema to print
    #[arg(value_enum, default_value_t = SchemaTarget::Infra)]
    pub target: SchemaTarget,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_synth_flags() {
        let cli = Cli::try_parse_from([
            "skyforge",
            "synth",
            "--detection",
            "detect.yml",
            "--skip-db",
            "postgres",
            "--skip-db",
            "redis",
            "--format",
            "json",
            "-o",
            "infra.json",
        ])
        .unwrap();

        match cli.command {
            Commands::Synth(args) => {
                assert_eq!(args.detection, PathBuf::from("detect.yml"));
                assert_eq!(args.skip_db, vec![DatabaseDep::Postgres, DatabaseDep::Redis]);
                assert_eq!(args.format, Some(OutputFormat::Json));
                assert_eq!(args.output, Some(PathBuf::from("infra.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_database_kind() {
        let result = Cli::try_parse_from(["skyforge", "synth", "-d", "d.yml", "--skip-db", "oracle"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["skyforge", "env", "show", "--env", "qa", "--non-interactive"])
            .unwrap();
        assert!(cli.non_interactive);
        match cli.command {
            Commands::Env(EnvCommands::Show(args)) => assert_eq!(args.env.as_deref(), Some("qa")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn schema_defaults_to_infra() {
        let cli = Cli::try_parse_from(["skyforge", "schema"]).unwrap();
        match cli.command {
            Commands::Schema(args) => assert_eq!(args.target, SchemaTarget::Infra),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["skyforge"]).is_err());
    }
}
