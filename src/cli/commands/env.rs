//! Environment command implementations.
//!
//! - `skyforge env ensure` picks a subscription and location when missing
//! - `skyforge env show` prints the stored values

use std::path::PathBuf;

use crate::account::FileAccount;
use crate::cli::args::{EnvEnsureArgs, EnvShowArgs};
use crate::environment::{Environment, EnvironmentStore, DEFAULT_ENVIRONMENT};
use crate::error::{Result, SkyforgeError};
use crate::provision::{ensure_env, EnvOverrides};
use crate::ui::{Console, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// Environment name from the flag, then config, then the default.
fn env_name(context: &CommandContext, flag: Option<&str>) -> String {
    flag.map(String::from)
        .or_else(|| context.config.default_environment.clone())
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}

/// The `env ensure` command.
pub struct EnvEnsureCommand {
    context: CommandContext,
    args: EnvEnsureArgs,
}

impl EnvEnsureCommand {
    pub fn new(context: CommandContext, args: EnvEnsureArgs) -> Self {
        Self { context, args }
    }

    fn account_path(&self) -> Result<PathBuf> {
        let configured = self
            .args
            .account
            .clone()
            .or_else(|| self.context.config.account_file.clone());

        match configured {
            Some(path) if path.is_relative() => Ok(self.context.project_root.join(path)),
            Some(path) => Ok(path),
            None => FileAccount::default_path().ok_or_else(|| SkyforgeError::ConfigValidationError {
                message: "cannot locate the home directory; pass --account".to_string(),
            }),
        }
    }
}

impl Command for EnvEnsureCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let name = env_name(&self.context, self.args.env.as_deref());
        let mut env = Environment::load(&self.context.project_root, &name)?;
        let mut account = FileAccount::load(&self.account_path()?)?;
        let overrides = EnvOverrides::from_process();

        ui.show_header(&format!("Environment '{}'", name));
        {
            let mut console = Console::new(ui, self.context.cancel.clone());
            ensure_env(&mut console, &mut env, &mut account, &overrides)?;
        }

        ui.success(&format!(
            "Environment '{}' deploys to subscription {} in {}",
            name,
            env.subscription_id(),
            env.location()
        ));
        Ok(CommandResult::success())
    }
}

/// The `env show` command.
pub struct EnvShowCommand {
    context: CommandContext,
    args: EnvShowArgs,
}

impl EnvShowCommand {
    pub fn new(context: CommandContext, args: EnvShowArgs) -> Self {
        Self { context, args }
    }
}

impl Command for EnvShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let name = env_name(&self.context, self.args.env.as_deref());
        let env = Environment::load(&self.context.project_root, &name)?;

        if env.values().is_empty() {
            ui.warning(&format!(
                "Environment '{}' has no values. Run 'skyforge env ensure' first.",
                name
            ));
            return Ok(CommandResult::failure(2));
        }

        ui.message(&format!("# {}", env.path().display()));
        for (key, value) in env.values() {
            ui.message(&format!("{}={}", key, value));
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancellationToken;
    use crate::config::SkyforgeConfig;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const ACCOUNT: &str = r#"
subscriptions:
  - id: sub-1
    name: Dev
locations:
  - name: eastus2
    display_name: East US 2
    regional_display_name: (US) East US 2
  - name: westus
    display_name: West US
    regional_display_name: (US) West US
"#;

    fn context(temp: &TempDir, config: SkyforgeConfig) -> CommandContext {
        CommandContext {
            project_root: temp.path().to_path_buf(),
            config,
            cancel: CancellationToken::new(),
        }
    }

    #[test]
    fn name_resolution_order() {
        let temp = TempDir::new().unwrap();
        let plain = context(&temp, SkyforgeConfig::default());
        assert_eq!(env_name(&plain, None), DEFAULT_ENVIRONMENT);
        assert_eq!(env_name(&plain, Some("qa")), "qa");

        let configured = context(
            &temp,
            SkyforgeConfig {
                default_environment: Some("staging".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(env_name(&configured, None), "staging");
        assert_eq!(env_name(&configured, Some("qa")), "qa");
    }

    #[test]
    fn ensure_fills_environment_from_account() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("account.yml"), ACCOUNT).unwrap();
        let mut ui = MockUI::new();
        ui.set_prompt_response("location", "1");

        let args = EnvEnsureArgs {
            env: Some("dev".to_string()),
            account: Some(PathBuf::from("account.yml")),
        };
        let result = EnvEnsureCommand::new(context(&temp, SkyforgeConfig::default()), args)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        let env = Environment::load(temp.path(), "dev").unwrap();
        assert_eq!(env.subscription_id(), "sub-1");
        assert_eq!(env.location(), "westus");
        assert!(ui.has_success("sub-1"));

        // The first pick became the account's default.
        let account = fs::read_to_string(temp.path().join("account.yml")).unwrap();
        assert!(account.contains("default_subscription: sub-1"));
    }

    #[test]
    fn ensure_without_account_file_fails() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let args = EnvEnsureArgs {
            env: None,
            account: Some(temp.path().join("none.yml")),
        };

        let err = EnvEnsureCommand::new(context(&temp, SkyforgeConfig::default()), args)
            .execute(&mut ui)
            .unwrap_err();
        assert!(matches!(err, SkyforgeError::ConfigNotFound { .. }));
    }

    #[test]
    fn show_prints_sorted_values() {
        let temp = TempDir::new().unwrap();
        let mut env = Environment::load(temp.path(), "dev").unwrap();
        env.set_location("eastus2");
        env.set_subscription_id("sub-1");
        env.save().unwrap();
        let mut ui = MockUI::new();

        let result = EnvShowCommand::new(
            context(&temp, SkyforgeConfig::default()),
            EnvShowArgs {
                env: Some("dev".to_string()),
            },
        )
        .execute(&mut ui)
        .unwrap();

        assert!(result.success);
        assert_eq!(
            &ui.messages()[1..],
            &["SKYFORGE_LOCATION=eastus2", "SKYFORGE_SUBSCRIPTION_ID=sub-1"]
        );
    }

    #[test]
    fn show_empty_environment_fails_softly() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = EnvShowCommand::new(
            context(&temp, SkyforgeConfig::default()),
            EnvShowArgs::default(),
        )
        .execute(&mut ui)
        .unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_warning("has no values"));
    }
}
