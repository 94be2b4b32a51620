//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cancel::CancellationToken;
use crate::cli::args::{Cli, Commands, EnvCommands};
use crate::config::{load_config, SkyforgeConfig};
use crate::error::Result;
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::env::{EnvEnsureCommand, EnvShowCommand};
use super::schema::SchemaCommand;
use super::synth::SynthCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub project_root: PathBuf,
    pub config: SkyforgeConfig,
    pub cancel: CancellationToken,
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    cancel: CancellationToken,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            cancel: CancellationToken::new(),
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The token tripped when the user interrupts a prompt.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    fn context(&self, cli: &Cli) -> Result<CommandContext> {
        let config = load_config(&self.project_root, cli.config.as_deref())?;
        Ok(CommandContext {
            project_root: self.project_root.clone(),
            config,
            cancel: self.cancel.clone(),
        })
    }

    /// Route the CLI subcommand to its implementation and execute it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Synth(args) => SynthCommand::new(self.context(cli)?, args.clone()).execute(ui),
            Commands::Env(EnvCommands::Ensure(args)) => {
                EnvEnsureCommand::new(self.context(cli)?, args.clone()).execute(ui)
            }
            Commands::Env(EnvCommands::Show(args)) => {
                EnvShowCommand::new(self.context(cli)?, args.clone()).execute(ui)
            }
            Commands::Schema(args) => SchemaCommand::new(args.clone()).execute(ui),
            Commands::Completions(args) => CompletionsCommand::new(args.clone()).execute(ui),
        }
    }
}
