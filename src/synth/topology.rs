//! Per-service entries of the infrastructure spec.

use std::collections::BTreeSet;

use crate::detection::{DatabaseDep, Project};
use crate::error::{Result, SkyforgeError};
use crate::names::label_name;
use crate::scaffold::{
    DatabaseReference, Frontend, InfraSpec, ServiceRole, ServiceSpec, REDIS_REFERENCE_NAME,
};
use crate::ui::Console;

use super::port::resolve_port;

/// Deployment name for a project: its directory name as a label.
pub fn service_name(project: &Project) -> String {
    let base = project
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| project.path.to_string_lossy().into_owned());
    label_name(&base)
}

/// Reference a service carries to the root entry for `db`.
///
/// `None` when the root entry has not been resolved.
pub fn database_reference(spec: &InfraSpec, db: DatabaseDep) -> Option<DatabaseReference> {
    let database_name = match db {
        DatabaseDep::Postgres => spec.db_postgres.as_ref()?.database_name.clone(),
        DatabaseDep::Mongo => spec.db_cosmos_mongo.as_ref()?.database_name.clone(),
        DatabaseDep::Redis => {
            spec.db_redis.as_ref()?;
            REDIS_REFERENCE_NAME.to_string()
        }
    };
    Some(DatabaseReference { database_name })
}

/// Build the entry for one service.
///
/// The port is resolved, the frontend marker is set for web UI projects,
/// and database references are attached for each dependency whose kind is
/// in `confirmed`.
pub fn build_service(
    console: &mut Console<'_>,
    project: &Project,
    confirmed: &BTreeSet<DatabaseDep>,
    spec: &InfraSpec,
) -> Result<ServiceSpec> {
    let name = service_name(project);
    let mut svc = ServiceSpec::new(&name);
    svc.port = Some(resolve_port(console, &name, project)?);

    if project.has_web_ui() {
        svc.role = Some(ServiceRole::Frontend(Frontend::default()));
    }

    for &db in project.database_deps.iter().filter(|db| confirmed.contains(db)) {
        let reference =
            database_reference(spec, db).ok_or_else(|| SkyforgeError::ConfigValidationError {
                message: format!(
                    "service '{}' depends on {} but no {} database was resolved",
                    name, db, db
                ),
            })?;
        match db {
            DatabaseDep::Postgres => svc.db_postgres = Some(reference),
            DatabaseDep::Mongo => svc.db_cosmos_mongo = Some(reference),
            DatabaseDep::Redis => svc.db_redis = Some(reference),
        }
    }

    Ok(svc)
}

/// Append an entry for every confirmed service, in detection order.
pub fn build_services(
    console: &mut Console<'_>,
    services: &[Project],
    confirmed: &BTreeSet<DatabaseDep>,
    spec: &mut InfraSpec,
) -> Result<()> {
    for project in services {
        let svc = build_service(console, project, confirmed, spec)?;
        tracing::debug!(service = %svc.name, port = ?svc.port, "service built");
        spec.services.push(svc);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancellationToken;
    use crate::detection::{Framework, Language};
    use crate::scaffold::{DatabaseCosmosMongo, DatabasePostgres, DatabaseRedis};
    use crate::ui::MockUI;

    fn all_databases() -> InfraSpec {
        InfraSpec {
            db_postgres: Some(DatabasePostgres {
                database_name: "rows".into(),
            }),
            db_cosmos_mongo: Some(DatabaseCosmosMongo {
                database_name: "docs".into(),
            }),
            db_redis: Some(DatabaseRedis {}),
            ..Default::default()
        }
    }

    fn build(project: &Project, confirmed: &[DatabaseDep], spec: &InfraSpec) -> Result<ServiceSpec> {
        let mut ui = MockUI::new();
        let mut console = Console::new(&mut ui, CancellationToken::new());
        let confirmed: BTreeSet<_> = confirmed.iter().copied().collect();
        build_service(&mut console, project, &confirmed, spec)
    }

    #[test]
    fn name_is_labelled_directory_name() {
        let project = Project::new("src/TodoApi", Language::DotNet);
        assert_eq!(service_name(&project), "todo-api");
    }

    #[test]
    fn name_falls_back_to_whole_path() {
        let project = Project::new("..", Language::Go);
        assert_eq!(service_name(&project), "");
        let project = Project::new("/", Language::Go);
        assert_eq!(service_name(&project), "");
    }

    #[test]
    fn web_ui_projects_are_frontends() {
        let project = Project::new("./web", Language::TypeScript).with_framework(Framework::React);
        let svc = build(&project, &[], &InfraSpec::default()).unwrap();
        assert!(svc.is_frontend());
        assert_eq!(svc.port, Some(80));
    }

    #[test]
    fn other_projects_have_no_role_yet() {
        let project = Project::new("./api", Language::Python).with_framework(Framework::Flask);
        let svc = build(&project, &[], &InfraSpec::default()).unwrap();
        assert!(svc.role.is_none());
    }

    #[test]
    fn references_match_root_names() {
        let project = Project::new("./api", Language::Go)
            .with_database(DatabaseDep::Postgres)
            .with_database(DatabaseDep::Mongo)
            .with_database(DatabaseDep::Redis);
        let svc = build(
            &project,
            &[DatabaseDep::Postgres, DatabaseDep::Mongo, DatabaseDep::Redis],
            &all_databases(),
        )
        .unwrap();

        assert_eq!(svc.db_postgres.unwrap().database_name, "rows");
        assert_eq!(svc.db_cosmos_mongo.unwrap().database_name, "docs");
        assert_eq!(svc.db_redis.unwrap().database_name, "redis");
    }

    #[test]
    fn unconfirmed_dependencies_are_ignored() {
        let project = Project::new("./api", Language::Go)
            .with_database(DatabaseDep::Postgres)
            .with_database(DatabaseDep::Redis);
        let svc = build(&project, &[DatabaseDep::Redis], &all_databases()).unwrap();

        assert!(svc.db_postgres.is_none());
        assert!(svc.db_redis.is_some());
    }

    #[test]
    fn unresolved_root_is_an_error() {
        let project = Project::new("./api", Language::Go).with_database(DatabaseDep::Postgres);
        let err = build(&project, &[DatabaseDep::Postgres], &InfraSpec::default()).unwrap_err();
        assert!(err.to_string().contains("no PostgreSQL database was resolved"));
    }

    #[test]
    fn services_keep_detection_order() {
        let mut ui = MockUI::new();
        let mut console = Console::new(&mut ui, CancellationToken::new());
        let projects = vec![
            Project::new("./zeta", Language::Go),
            Project::new("./alpha", Language::Go),
        ];
        let mut spec = InfraSpec::default();

        build_services(&mut console, &projects, &BTreeSet::new(), &mut spec).unwrap();
        let names: Vec<_> = spec.services.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha"]);
    }
}
