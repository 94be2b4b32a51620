//! Environment readiness.

use crate::account::{AccountManager, Location};
use crate::environment::EnvironmentStore;
use crate::error::Result;
use crate::ui::Console;

use super::selector::{prompt_location, prompt_subscription};

/// Process variable that preselects a subscription.
pub const SUBSCRIPTION_OVERRIDE_VAR: &str = "SKYFORGE_SUBSCRIPTION_ID";

/// Values that steer selection, captured once per guard call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub subscription_id: Option<String>,
}

impl EnvOverrides {
    /// Read overrides from the process environment.
    pub fn from_process() -> Self {
        Self {
            subscription_id: std::env::var(SUBSCRIPTION_OVERRIDE_VAR)
                .ok()
                .filter(|v| !v.is_empty()),
        }
    }
}

/// Make sure `env` has a subscription and a location.
///
/// Missing values are chosen interactively and saved one at a time, so a
/// failure after the subscription step leaves a resumable environment.
/// When both are present this does nothing.
pub fn ensure_env(
    console: &mut Console<'_>,
    env: &mut dyn EnvironmentStore,
    account: &mut dyn AccountManager,
    overrides: &EnvOverrides,
) -> Result<()> {
    if env.subscription_id().is_empty() {
        let subscription_id = prompt_subscription(
            console,
            account,
            "Please select a subscription to use:",
            overrides.subscription_id.as_deref(),
        )?;
        env.set_subscription_id(&subscription_id);
        env.save()?;
    }

    if env.location().is_empty() {
        let subscription_id = env.subscription_id();
        let location = prompt_location(
            console,
            account,
            &subscription_id,
            "Please select a location to use:",
            &|_: &Location| true,
        )?;
        env.set_location(&location);
        env.save()?;
    }

    tracing::debug!(
        subscription = %env.subscription_id(),
        location = %env.location(),
        "environment ready"
    );
    Ok(())
}
