//! Detection manifest loading.
//!
//! The detector writes its findings as a YAML or JSON manifest. The
//! manifest is the only way detection results enter this crate.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, SkyforgeError};

use super::types::Project;

/// Detected projects in detection order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetectionManifest {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl DetectionManifest {
    /// Load a manifest, choosing the parser from the file extension.
    ///
    /// `.json` is parsed as JSON; everything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SkyforgeError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let manifest = if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_yaml(&content)
        };

        let manifest = manifest.map_err(|message| SkyforgeError::ConfigParseError {
            path: path.to_path_buf(),
            message,
        })?;

        tracing::debug!(
            path = %path.display(),
            projects = manifest.projects.len(),
            "loaded detection manifest"
        );
        Ok(manifest)
    }

    /// Parse YAML manifest content.
    pub fn parse_yaml(content: &str) -> std::result::Result<Self, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Parse JSON manifest content.
    pub fn parse_json(content: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }
}
