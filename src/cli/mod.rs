//! Command-line interface for Skyforge.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, EnvCommands, EnvEnsureArgs, EnvShowArgs, SchemaArgs,
    SchemaTarget, SynthArgs,
};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
