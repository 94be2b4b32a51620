//! Cloud account capability.
//!
//! The [`AccountManager`] trait is the seam between environment setup and
//! whatever knows the user's subscriptions and locations. [`FileAccount`]
//! reads a YAML profile; [`MockAccount`] is a scripted fake for tests.

pub mod file;
pub mod mock;

pub use file::{AccountProfile, FileAccount, DEFAULT_LOCATION};
pub use mock::MockAccount;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A billing subscription the user can deploy into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Subscription {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

impl Subscription {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tenant_id: None,
        }
    }
}

/// A deployment region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    /// Short name, e.g. `eastus2`.
    pub name: String,
    /// Display name, e.g. `East US 2`.
    pub display_name: String,
    /// Display name with the geography, e.g. `(US) East US 2`.
    pub regional_display_name: String,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        regional_display_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            regional_display_name: regional_display_name.into(),
        }
    }
}

/// Access to the user's subscriptions, locations and stored defaults.
pub trait AccountManager {
    /// Subscriptions in display order.
    fn subscriptions(&self) -> Result<Vec<Subscription>>;

    /// The stored default subscription, if any.
    fn default_subscription_id(&self) -> Result<Option<String>>;

    /// Whether a default subscription has been stored.
    fn has_default_subscription(&self) -> bool;

    /// Store a default subscription.
    fn set_default_subscription(&mut self, subscription_id: &str) -> Result<()>;

    /// Locations available to a subscription, in display order.
    fn locations(&self, subscription_id: &str) -> Result<Vec<Location>>;

    /// The stored default location, or a built-in fallback.
    fn default_location(&self) -> Result<String>;

    /// Whether a default location has been stored.
    fn has_default_location(&self) -> bool;

    /// Store a default location for a subscription.
    fn set_default_location(&mut self, subscription_id: &str, location: &str) -> Result<()>;
}
