//! Scripted account for tests.

use std::cell::{Cell, RefCell};

use crate::error::{Result, SkyforgeError};

use super::{AccountManager, Location, Subscription, DEFAULT_LOCATION};

/// In-memory [`AccountManager`] that records default changes.
#[derive(Debug, Default)]
pub struct MockAccount {
    subscriptions: Vec<Subscription>,
    locations: Vec<Location>,
    default_subscription: Option<String>,
    default_location: Option<String>,
    fail_set_defaults: bool,
    subscription_calls: Cell<usize>,
    location_calls: RefCell<Vec<String>>,
    set_subscription_calls: Vec<String>,
    set_location_calls: Vec<(String, String)>,
}

impl MockAccount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subscriptions(mut self, subscriptions: Vec<Subscription>) -> Self {
        self.subscriptions = subscriptions;
        self
    }

    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_default_subscription(mut self, id: &str) -> Self {
        self.default_subscription = Some(id.to_string());
        self
    }

    pub fn with_default_location(mut self, name: &str) -> Self {
        self.default_location = Some(name.to_string());
        self
    }

    /// Make every `set_default_*` call fail.
    pub fn failing_set_defaults(mut self) -> Self {
        self.fail_set_defaults = true;
        self
    }

    /// How many times subscriptions were listed.
    pub fn subscription_calls(&self) -> usize {
        self.subscription_calls.get()
    }

    /// Subscription ids locations were listed for.
    pub fn location_calls(&self) -> Vec<String> {
        self.location_calls.borrow().clone()
    }

    pub fn set_subscription_calls(&self) -> &[String] {
        &self.set_subscription_calls
    }

    pub fn set_location_calls(&self) -> &[(String, String)] {
        &self.set_location_calls
    }

    fn set_failure() -> SkyforgeError {
        SkyforgeError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "scripted failure saving account defaults",
        ))
    }
}

impl AccountManager for MockAccount {
    fn subscriptions(&self) -> Result<Vec<Subscription>> {
        self.subscription_calls.set(self.subscription_calls.get() + 1);
        Ok(self.subscriptions.clone())
    }

    fn default_subscription_id(&self) -> Result<Option<String>> {
        Ok(self.default_subscription.clone())
    }

    fn has_default_subscription(&self) -> bool {
        self.default_subscription.is_some()
    }

    fn set_default_subscription(&mut self, subscription_id: &str) -> Result<()> {
        self.set_subscription_calls.push(subscription_id.to_string());
        if self.fail_set_defaults {
            return Err(Self::set_failure());
        }
        self.default_subscription = Some(subscription_id.to_string());
        Ok(())
    }

    fn locations(&self, subscription_id: &str) -> Result<Vec<Location>> {
        self.location_calls
            .borrow_mut()
            .push(subscription_id.to_string());
        Ok(self.locations.clone())
    }

    fn default_location(&self) -> Result<String> {
        Ok(self
            .default_location
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string()))
    }

    fn has_default_location(&self) -> bool {
        self.default_location.is_some()
    }

    fn set_default_location(&mut self, subscription_id: &str, location: &str) -> Result<()> {
        self.set_location_calls
            .push((subscription_id.to_string(), location.to_string()));
        if self.fail_set_defaults {
            return Err(Self::set_failure());
        }
        self.default_location = Some(location.to_string());
        Ok(())
    }
}
