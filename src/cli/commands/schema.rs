//! Schema command implementation.
//!
//! The `skyforge schema` command prints JSON schemas for the files skyforge
//! reads and writes.

use anyhow::anyhow;
use schemars::schema_for;

use crate::account::AccountProfile;
use crate::cli::args::{SchemaArgs, SchemaTarget};
use crate::config::SkyforgeConfig;
use crate::detection::DetectionManifest;
use crate::error::Result;
use crate::scaffold::InfraSpec;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
pub struct SchemaCommand {
    args: SchemaArgs,
}

impl SchemaCommand {
    pub fn new(args: SchemaArgs) -> Self {
        Self { args }
    }
}

/// JSON schema for `target`, pretty-printed.
pub fn schema_json(target: SchemaTarget) -> Result<String> {
    let schema = match target {
        SchemaTarget::Infra => schema_for!(InfraSpec),
        SchemaTarget::Detection => schema_for!(DetectionManifest),
        SchemaTarget::Config => schema_for!(SkyforgeConfig),
        SchemaTarget::Account => schema_for!(AccountProfile),
    };
    Ok(serde_json::to_string_pretty(&schema).map_err(|e| anyhow!("failed to render schema: {}", e))?)
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&schema_json(self.args.target)?);
        Ok(CommandResult::success())
    }
}
