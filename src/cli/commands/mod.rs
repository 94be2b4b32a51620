//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! dispatched via [`CommandDispatcher`], which loads configuration once and
//! hands every command the same [`CommandContext`].

pub mod completions;
pub mod dispatcher;
pub mod env;
pub mod schema;
pub mod synth;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
