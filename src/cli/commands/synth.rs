//! Synth command implementation.
//!
//! The `skyforge synth` command reads a detection manifest, asks for
//! whatever it cannot infer, and writes the resulting infrastructure spec.

use anyhow::anyhow;
use std::fs;

use crate::cli::args::SynthArgs;
use crate::config::OutputFormat;
use crate::detection::{DetectConfirm, DetectionManifest};
use crate::error::Result;
use crate::scaffold::InfraSpec;
use crate::synth::infra_spec_from_detect;
use crate::ui::{Console, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The synth command implementation.
pub struct SynthCommand {
    context: CommandContext,
    args: SynthArgs,
}

impl SynthCommand {
    /// Create a new synth command.
    pub fn new(context: CommandContext, args: SynthArgs) -> Self {
        Self { context, args }
    }

    fn confirm(&self, manifest: DetectionManifest, ui: &mut dyn UserInterface) -> DetectConfirm {
        let mut confirm = DetectConfirm::from_projects(manifest.projects);
        for db in &self.args.skip_db {
            if !confirm.remove_database(*db) {
                ui.warning(&format!("{} was not detected; nothing to skip", db));
            }
        }
        confirm
    }
}

/// Serialize a spec in the requested format.
pub fn render_spec(spec: &InfraSpec, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(spec).map_err(|e| anyhow!("failed to render YAML: {}", e))?
        }
        OutputFormat::Json => serde_json::to_string_pretty(spec)
            .map_err(|e| anyhow!("failed to render JSON: {}", e))?,
    };
    Ok(rendered)
}

impl Command for SynthCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let detection_path = if self.args.detection.is_absolute() {
            self.args.detection.clone()
        } else {
            self.context.project_root.join(&self.args.detection)
        };
        let manifest = DetectionManifest::load(&detection_path)?;

        if manifest.projects.is_empty() {
            ui.warning("The detection manifest lists no projects.");
        }

        let confirm = self.confirm(manifest, ui);

        let spec = {
            let mut console = Console::new(ui, self.context.cancel.clone());
            infra_spec_from_detect(&mut console, &confirm)?
        };
        spec.validate()?;

        let format = self.args.format.unwrap_or(self.context.config.output);
        let rendered = render_spec(&spec, format)?;

        match &self.args.output {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.clone()
                } else {
                    self.context.project_root.join(path)
                };
                fs::write(&path, rendered)?;
                ui.success(&format!(
                    "Wrote infrastructure for {} service(s) to {}",
                    spec.services.len(),
                    path.display()
                ));
            }
            None => ui.message(rendered.trim_end()),
        }

        Ok(CommandResult::success())
    }
}
