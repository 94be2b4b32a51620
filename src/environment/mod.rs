//! Per-workspace deployment environments.
//!
//! An environment remembers which subscription and location a workspace
//! deploys to. [`EnvironmentStore`] is the capability the readiness guard
//! works against; [`Environment`] persists it as a dotenv file under
//! `<project>/.skyforge/<name>/.env`.

pub mod mock;
pub mod store;

pub use mock::MockEnvironment;
pub use store::{validate_env_name, Environment, DEFAULT_ENVIRONMENT};

use crate::error::Result;

/// Key holding the selected subscription id.
pub const SUBSCRIPTION_ID_KEY: &str = "SKYFORGE_SUBSCRIPTION_ID";

/// Key holding the selected location.
pub const LOCATION_KEY: &str = "SKYFORGE_LOCATION";

/// Durable per-workspace context.
///
/// Setters only change memory; nothing is durable until [`save`](Self::save).
pub trait EnvironmentStore {
    /// Selected subscription id, empty when unset.
    fn subscription_id(&self) -> String;

    fn set_subscription_id(&mut self, id: &str);

    /// Selected location, empty when unset.
    fn location(&self) -> String;

    fn set_location(&mut self, location: &str);

    /// Persist the current values.
    fn save(&mut self) -> Result<()>;
}
