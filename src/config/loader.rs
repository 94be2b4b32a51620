//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::merger::merge_configs;
use crate::config::schema::SkyforgeConfig;
use crate::error::{Result, SkyforgeError};

/// Directory holding skyforge state inside a project and under `$HOME`.
pub const SKYFORGE_DIR: &str = ".skyforge";

/// Configuration files in merge order (later overrides earlier).
///
/// 1. User global config (`~/.skyforge/config.yml`)
/// 2. Project config (`<project>/.skyforge/config.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    pub user_global: Option<PathBuf>,
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover existing config files for a project.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: dirs::home_dir()
                .map(|home| home.join(SKYFORGE_DIR).join("config.yml"))
                .filter(|p| p.exists()),
            project: Some(project_root.join(SKYFORGE_DIR).join("config.yml"))
                .filter(|p| p.exists()),
        }
    }

    /// Existing paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

/// Find the project root by walking up from `start`.
///
/// A directory containing `.skyforge` wins; `.git` is the fallback.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(SKYFORGE_DIR).is_dir() || current.join(".git").exists() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SkyforgeError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SkyforgeError::Io(e)
        }
    })
}

/// Load one config file.
pub fn load_config_file(path: &Path) -> Result<SkyforgeConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Parse YAML content; `source_path` is used in errors.
pub fn parse_config(content: &str, source_path: &Path) -> Result<SkyforgeConfig> {
    serde_yaml::from_str(content).map_err(|e| SkyforgeError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a config file as a raw YAML value for merging.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;
    let value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| SkyforgeError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    // An empty file parses as null; treat it as an empty mapping.
    Ok(if value.is_null() {
        serde_yaml::Value::Mapping(Default::default())
    } else {
        value
    })
}

/// Merge every config file that applies to `project_root`.
///
/// With no config files at all the defaults are returned.
pub fn load_merged_config(project_root: &Path) -> Result<SkyforgeConfig> {
    let paths = ConfigPaths::discover(project_root);

    let values = paths
        .all_existing()
        .into_iter()
        .map(|p| {
            tracing::debug!(path = %p.display(), "loading config");
            load_config_value(p)
        })
        .collect::<Result<Vec<_>>>()?;

    serde_yaml::from_value(merge_configs(&values)).map_err(|e| SkyforgeError::ConfigParseError {
        path: project_root.join(SKYFORGE_DIR).join("config.yml"),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config, using `config_override` alone when given.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<SkyforgeConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    fn write_project_config(temp: &TempDir, content: &str) -> PathBuf {
        let dir = temp.path().join(SKYFORGE_DIR);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn discover_finds_project_config() {
        let temp = TempDir::new().unwrap();
        write_project_config(&temp, "output: json");

        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.project.is_some());
    }

    #[test]
    fn discover_without_project_config() {
        let temp = TempDir::new().unwrap();
        let paths = ConfigPaths::discover(temp.path());
        assert!(paths.project.is_none());
    }

    #[test]
    fn project_config_is_loaded() {
        let temp = TempDir::new().unwrap();
        write_project_config(&temp, "output: json\ndefault_environment: qa\n");

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.default_environment.as_deref(), Some("qa"));
    }

    #[test]
    fn empty_config_file_is_default() {
        let temp = TempDir::new().unwrap();
        let path = write_project_config(&temp, "");

        assert_eq!(load_config_value(&path).unwrap(), serde_yaml::Value::Mapping(Default::default()));
    }

    #[test]
    fn override_is_loaded_alone() {
        let temp = TempDir::new().unwrap();
        write_project_config(&temp, "default_environment: qa\n");
        let other = temp.path().join("other.yml");
        fs::write(&other, "output: json\n").unwrap();

        let config = load_config(temp.path(), Some(&other)).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.default_environment.is_none());
    }

    #[test]
    fn missing_override_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config(temp.path(), Some(&temp.path().join("nope.yml"))).unwrap_err();
        assert!(matches!(err, SkyforgeError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write_project_config(&temp, "output: [unclosed");
        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, SkyforgeError::ConfigParseError { .. }));
    }

    #[test]
    fn project_root_from_marker_dir() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(SKYFORGE_DIR)).unwrap();
        let nested = temp.path().join("src").join("api");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested).as_deref(), Some(temp.path()));
    }
}
