//! Dotenv-backed environment.

use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::config::EnvFileParser;
use crate::error::{Result, SkyforgeError};

use super::{EnvironmentStore, LOCATION_KEY, SUBSCRIPTION_ID_KEY};

/// Environment used when none is named.
pub const DEFAULT_ENVIRONMENT: &str = "dev";

static ENV_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").unwrap());

/// Reject environment names that cannot be used as a directory name.
pub fn validate_env_name(name: &str) -> Result<()> {
    if ENV_NAME.is_match(name) && name != "." && name != ".." {
        Ok(())
    } else {
        Err(SkyforgeError::ConfigValidationError {
            message: format!(
                "invalid environment name '{}': use letters, digits, '-', '_' or '.'",
                name
            ),
        })
    }
}

/// A named environment stored at `<project>/.skyforge/<name>/.env`.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    name: String,
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl Environment {
    /// Path of the dotenv file for `name` under `project_root`.
    pub fn file_path(project_root: &Path, name: &str) -> PathBuf {
        project_root.join(".skyforge").join(name).join(".env")
    }

    /// Load an environment. A missing file yields an empty environment.
    pub fn load(project_root: &Path, name: &str) -> Result<Self> {
        validate_env_name(name)?;
        let path = Self::file_path(project_root, name);
        let values = EnvFileParser::load_optional(&path)?;

        tracing::debug!(
            env = name,
            path = %path.display(),
            keys = values.len(),
            "loaded environment"
        );

        Ok(Self {
            name: name.to_string(),
            path,
            values,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored values in key order.
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

impl EnvironmentStore for Environment {
    fn subscription_id(&self) -> String {
        self.get(SUBSCRIPTION_ID_KEY).unwrap_or_default().to_string()
    }

    fn set_subscription_id(&mut self, id: &str) {
        self.set(SUBSCRIPTION_ID_KEY, id);
    }

    fn location(&self) -> String {
        self.get(LOCATION_KEY).unwrap_or_default().to_string()
    }

    fn set_location(&mut self, location: &str) {
        self.set(LOCATION_KEY, location);
    }

    /// Write every value, sorted by key, via temp file and rename.
    fn save(&mut self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, EnvFileParser::render(&self.values))?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(env = %self.name, "saved environment");
        Ok(())
    }
}
