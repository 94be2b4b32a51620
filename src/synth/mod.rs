//! Infrastructure synthesis.
//!
//! Turns confirmed detection results into an [`InfraSpec`]. The flow runs
//! in three phases:
//!
//! 1. Root databases are resolved for every confirmed kind ([`database`]).
//! 2. Each service gets a name, a port and database references ([`topology`]).
//! 3. Services are classified and linked frontend-to-backend ([`link`]).
//!
//! All user interaction goes through the [`Console`] passed in, so the
//! whole flow can be driven by [`MockUI`](crate::ui::MockUI) in tests.

pub mod database;
pub mod db_name;
pub mod link;
pub mod port;
pub mod topology;

pub use database::resolve_databases;
pub use db_name::{prompt_db_name, validate_name, NameCheck};
pub use link::link_services;
pub use port::{default_port, parse_port, resolve_port, OTHER_PORT_LABEL};
pub use topology::{build_service, build_services, database_reference, service_name};

use crate::detection::DetectConfirm;
use crate::error::Result;
use crate::scaffold::InfraSpec;
use crate::ui::Console;

/// Synthesize into an existing spec.
///
/// On error `spec` holds whatever was resolved before the failure.
pub fn synthesize_into(
    console: &mut Console<'_>,
    detect: &DetectConfirm,
    spec: &mut InfraSpec,
) -> Result<()> {
    tracing::info!(
        services = detect.services.len(),
        databases = detect.databases.len(),
        "synthesizing infrastructure"
    );

    resolve_databases(console, detect.databases.iter().copied(), spec)?;
    build_services(console, &detect.services, &detect.databases, spec)?;
    link_services(&mut spec.services);
    Ok(())
}

/// Build the infrastructure spec for confirmed detection results.
pub fn infra_spec_from_detect(
    console: &mut Console<'_>,
    detect: &DetectConfirm,
) -> Result<InfraSpec> {
    let mut spec = InfraSpec::default();
    synthesize_into(console, detect, &mut spec)?;
    Ok(spec)
}
