//! Skyforge - Infrastructure synthesis for detected applications.
//!
//! Skyforge turns the services found in a repository into an
//! infrastructure spec (services, ports, frontend/backend wiring and
//! databases) and makes sure a deployment environment knows which
//! subscription and location to target.
//!
//! # Modules
//!
//! - [`account`] - Subscriptions, locations and stored defaults
//! - [`cancel`] - Cooperative cancellation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and dotenv files
//! - [`detection`] - Detection results and manifests
//! - [`environment`] - Per-workspace deployment environments
//! - [`error`] - Error types and result aliases
//! - [`names`] - Name normalization
//! - [`provision`] - Subscription/location selection and environment readiness
//! - [`scaffold`] - The infrastructure spec model
//! - [`synth`] - Synthesis of the infrastructure spec
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use skyforge::cancel::CancellationToken;
//! use skyforge::detection::{DatabaseDep, DetectConfirm, Language, Project};
//! use skyforge::synth::infra_spec_from_detect;
//! use skyforge::ui::{Console, MockUI};
//!
//! let detect = DetectConfirm::from_projects(vec![
//!     Project::new("./api", Language::Go).with_database(DatabaseDep::Redis),
//! ]);
//!
//! let mut ui = MockUI::new();
//! let mut console = Console::new(&mut ui, CancellationToken::new());
//! let spec = infra_spec_from_detect(&mut console, &detect).unwrap();
//!
//! assert_eq!(spec.services[0].name, "api");
//! assert!(spec.services[0].is_backend());
//! assert!(spec.db_redis.is_some());
//! ```

pub mod account;
pub mod cancel;
pub mod cli;
pub mod config;
pub mod detection;
pub mod environment;
pub mod error;
pub mod names;
pub mod provision;
pub mod scaffold;
pub mod synth;
pub mod ui;

pub use error::{Result, SkyforgeError};
