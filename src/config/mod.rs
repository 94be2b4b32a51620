//! Configuration loading for Skyforge.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering in [`merger`]
//! - Dotenv files in [`env_file`]
//!
//! # Example
//!
//! ```
//! use skyforge::config::{load_merged_config, OutputFormat};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".skyforge");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "output: json").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.output, OutputFormat::Json);
//! ```
//!
//! # Configuration File Locations
//!
//! Merged in this order, later files overriding earlier ones field by field:
//! 1. User global config (`~/.skyforge/config.yml`)
//! 2. Project config (`.skyforge/config.yml`)

pub mod env_file;
pub mod loader;
pub mod merger;
pub mod schema;

pub use env_file::EnvFileParser;
pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, ConfigPaths, SKYFORGE_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{OutputFormat, SkyforgeConfig};
