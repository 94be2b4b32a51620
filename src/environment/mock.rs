//! In-memory environment for tests.

use crate::error::{Result, SkyforgeError};

use super::EnvironmentStore;

/// [`EnvironmentStore`] that counts saves and can be told to fail them.
#[derive(Debug, Default, Clone)]
pub struct MockEnvironment {
    subscription_id: String,
    location: String,
    saves: usize,
    fail_saves: bool,
    saved: Option<(String, String)>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subscription_id(mut self, id: &str) -> Self {
        self.subscription_id = id.to_string();
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    /// Make every `save` fail.
    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Number of `save` calls, failed ones included.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// `(subscription_id, location)` as of the last successful save.
    pub fn saved(&self) -> Option<(&str, &str)> {
        self.saved
            .as_ref()
            .map(|(s, l)| (s.as_str(), l.as_str()))
    }
}

impl EnvironmentStore for MockEnvironment {
    fn subscription_id(&self) -> String {
        self.subscription_id.clone()
    }

    fn set_subscription_id(&mut self, id: &str) {
        self.subscription_id = id.to_string();
    }

    fn location(&self) -> String {
        self.location.clone()
    }

    fn set_location(&mut self, location: &str) {
        self.location = location.to_string();
    }

    fn save(&mut self) -> Result<()> {
        self.saves += 1;
        if self.fail_saves {
            return Err(SkyforgeError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "scripted failure saving environment",
            )));
        }
        self.saved = Some((self.subscription_id.clone(), self.location.clone()));
        Ok(())
    }
}
