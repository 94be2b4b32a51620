//! Account profile persisted as YAML.
//!
//! The profile lives at `~/.skyforge/account.yml` unless configured
//! otherwise:
//!
//! ```yaml
//! subscriptions:
//!   - id: 00000000-0000-0000-0000-000000000001
//!     name: Dev
//! locations:
//!   - name: eastus2
//!     display_name: East US 2
//!     regional_display_name: (US) East US 2
//! default_subscription: 00000000-0000-0000-0000-000000000001
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SkyforgeError};

use super::{AccountManager, Location, Subscription};

/// Location used when no default has been stored.
pub const DEFAULT_LOCATION: &str = "eastus2";

/// On-disk contents of an account profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AccountProfile {
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,

    #[serde(default)]
    pub locations: Vec<Location>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_subscription: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_location: Option<String>,
}

/// [`AccountManager`] backed by an [`AccountProfile`] file.
#[derive(Debug, Clone)]
pub struct FileAccount {
    path: PathBuf,
    profile: AccountProfile,
}

impl FileAccount {
    /// Default profile location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".skyforge").join("account.yml"))
    }

    /// Load the profile at `path`. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SkyforgeError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let profile: AccountProfile =
            serde_yaml::from_str(&content).map_err(|e| SkyforgeError::ConfigParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            subscriptions = profile.subscriptions.len(),
            locations = profile.locations.len(),
            "loaded account profile"
        );

        Ok(Self {
            path: path.to_path_buf(),
            profile,
        })
    }

    /// Wrap an in-memory profile that will be saved to `path`.
    pub fn new(path: impl Into<PathBuf>, profile: AccountProfile) -> Self {
        Self {
            path: path.into(),
            profile,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn profile(&self) -> &AccountProfile {
        &self.profile
    }

    /// Write the profile using the write-to-temp-then-rename pattern.
    pub fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let content = serde_yaml::to_string(&self.profile).map_err(|e| {
            SkyforgeError::ConfigValidationError {
                message: format!("Failed to serialize account profile: {}", e),
            }
        })?;

        let temp_path = self.path.with_extension("yml.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

impl AccountManager for FileAccount {
    fn subscriptions(&self) -> Result<Vec<Subscription>> {
        Ok(self.profile.subscriptions.clone())
    }

    fn default_subscription_id(&self) -> Result<Option<String>> {
        Ok(self.profile.default_subscription.clone())
    }

    fn has_default_subscription(&self) -> bool {
        self.profile
            .default_subscription
            .as_deref()
            .is_some_and(|s| !s.is_empty())
    }

    fn set_default_subscription(&mut self, subscription_id: &str) -> Result<()> {
        self.profile.default_subscription = Some(subscription_id.to_string());
        self.save()
    }

    fn locations(&self, _subscription_id: &str) -> Result<Vec<Location>> {
        Ok(self.profile.locations.clone())
    }

    fn default_location(&self) -> Result<String> {
        Ok(self
            .profile
            .default_location
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string()))
    }

    fn has_default_location(&self) -> bool {
        self.profile
            .default_location
            .as_deref()
            .is_some_and(|l| !l.is_empty())
    }

    fn set_default_location(&mut self, _subscription_id: &str, location: &str) -> Result<()> {
        self.profile.default_location = Some(location.to_string());
        self.save()
    }
}
