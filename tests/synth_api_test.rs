//! Integration tests for synthesis through the public API.

use std::collections::BTreeSet;

use skyforge::cancel::CancellationToken;
use skyforge::detection::{
    DatabaseDep, DetectConfirm, DetectionManifest, Framework, Language, Project,
};
use skyforge::scaffold::InfraSpec;
use skyforge::synth::{build_service, infra_spec_from_detect, synthesize_into};
use skyforge::ui::{Console, MockUI};
use skyforge::SkyforgeError;

fn synth(ui: &mut MockUI, detect: &DetectConfirm) -> skyforge::Result<InfraSpec> {
    let mut console = Console::new(ui, CancellationToken::new());
    infra_spec_from_detect(&mut console, detect)
}

fn shop() -> Vec<Project> {
    vec![
        Project::new("./storefront", Language::TypeScript).with_framework(Framework::React),
        Project::new("./orders", Language::Java)
            .with_framework(Framework::Spring)
            .with_database(DatabaseDep::Postgres),
        Project::new("./cart", Language::Python)
            .with_database(DatabaseDep::Redis)
            .with_docker("./cart/Dockerfile", &[5000]),
    ]
}

#[test]
fn frontend_and_two_backends() {
    let mut ui = MockUI::new();
    ui.set_prompt_response("db_name:postgres", "orders");

    let spec = synth(&mut ui, &DetectConfirm::from_projects(shop())).unwrap();
    spec.validate().unwrap();

    let names: Vec<&str> = spec.services.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["storefront", "orders", "cart"]);

    let storefront = spec.service("storefront").unwrap();
    assert_eq!(storefront.port, Some(80));
    let backends: Vec<&str> = storefront
        .frontend()
        .unwrap()
        .backends
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(backends, vec!["orders", "cart"]);

    let orders = spec.service("orders").unwrap();
    assert_eq!(orders.port, Some(8080));
    assert_eq!(orders.backend().unwrap().frontends[0].name, "storefront");
    assert_eq!(orders.db_postgres.as_ref().unwrap().database_name, "orders");

    let cart = spec.service("cart").unwrap();
    assert_eq!(cart.port, Some(5000));
    assert_eq!(cart.db_redis.as_ref().unwrap().database_name, "redis");
    assert!(spec.db_redis.is_some());
}

#[test]
fn redis_never_prompts() {
    let mut ui = MockUI::new();
    let detect = DetectConfirm::from_projects(vec![
        Project::new("./cache-worker", Language::Go).with_database(DatabaseDep::Redis)
    ]);

    synth(&mut ui, &detect).unwrap();
    assert!(ui.prompts_shown().is_empty());
}

#[test]
fn service_order_does_not_change_links() {
    let mut forward_ui = MockUI::new();
    forward_ui.set_prompt_response("db_name:postgres", "orders");
    let forward = synth(&mut forward_ui, &DetectConfirm::from_projects(shop())).unwrap();

    let mut reversed_projects = shop();
    reversed_projects.reverse();
    let mut reversed_ui = MockUI::new();
    reversed_ui.set_prompt_response("db_name:postgres", "orders");
    let reversed =
        synth(&mut reversed_ui, &DetectConfirm::from_projects(reversed_projects)).unwrap();

    for svc in &forward.services {
        let other = reversed.service(&svc.name).unwrap();
        assert_eq!(svc.port, other.port);
        assert_eq!(svc.is_frontend(), other.is_frontend());
    }
    assert_eq!(
        reversed.service("storefront").unwrap().frontend().unwrap().backends.len(),
        2
    );
}

#[test]
fn removed_database_is_skipped_everywhere() {
    let mut ui = MockUI::new();
    let mut detect = DetectConfirm::from_projects(shop());
    detect.remove_database(DatabaseDep::Postgres);

    let spec = synth(&mut ui, &detect).unwrap();
    spec.validate().unwrap();
    assert!(spec.db_postgres.is_none());
    assert!(spec.service("orders").unwrap().db_postgres.is_none());
    assert_eq!(ui.prompt_count("db_name:postgres"), 0);
}

#[test]
fn unresolved_root_database_is_a_validation_error() {
    let mut ui = MockUI::new();
    let mut console = Console::new(&mut ui, CancellationToken::new());
    let project = Project::new("./orders", Language::Go).with_database(DatabaseDep::Postgres);
    let confirmed: BTreeSet<DatabaseDep> = [DatabaseDep::Postgres].into_iter().collect();

    let err =
        build_service(&mut console, &project, &confirmed, &InfraSpec::default()).unwrap_err();
    assert!(matches!(err, SkyforgeError::ConfigValidationError { .. }));
    assert!(err.to_string().contains("orders"));
}

#[test]
fn cancellation_keeps_partial_spec() {
    let mut ui = MockUI::new();
    ui.fail_prompt("db_name:postgres", std::io::ErrorKind::Interrupted);
    let detect = DetectConfirm::from_projects(vec![
        Project::new("./api", Language::Go)
            .with_database(DatabaseDep::Mongo)
            .with_database(DatabaseDep::Postgres),
    ]);
    ui.set_prompt_response("db_name:mongo", "docs");

    let token = CancellationToken::new();
    let mut spec = InfraSpec::default();
    let result = {
        let mut console = Console::new(&mut ui, token.clone());
        synthesize_into(&mut console, &detect, &mut spec)
    };

    assert!(result.unwrap_err().is_cancelled());
    assert!(token.is_cancelled());
    assert_eq!(spec.db_cosmos_mongo.unwrap().database_name, "docs");
    assert!(spec.db_postgres.is_none());
    assert!(spec.services.is_empty());
}

#[test]
fn manifest_drives_synthesis() {
    let manifest = DetectionManifest::parse_yaml(
        r#"
projects:
  - path: ./src/Web
    language: dotnet
    dependencies: [angular]
  - path: ./src/Api
    language: dotnet
    docker:
      path: ./src/Api/Dockerfile
      ports:
        - number: 8080
        - number: 8443
"#,
    )
    .unwrap();

    let mut ui = MockUI::new();
    ui.set_prompt_response("port_select:api", "1");

    let spec = synth(&mut ui, &DetectConfirm::from_projects(manifest.projects)).unwrap();
    assert_eq!(spec.service("web").unwrap().port, Some(8080));
    assert_eq!(spec.service("api").unwrap().port, Some(8443));
    assert!(spec.service("web").unwrap().is_frontend());
}

#[test]
fn serialized_spec_uses_camel_case() {
    let mut ui = MockUI::new();
    ui.set_prompt_response("db_name:mongo", "");
    let detect = DetectConfirm::from_projects(vec![
        Project::new("./api", Language::JavaScript).with_database(DatabaseDep::Mongo)
    ]);

    let spec = synth(&mut ui, &detect).unwrap();
    let json = serde_json::to_value(&spec).unwrap();

    assert_eq!(json["dbCosmosMongo"]["databaseName"], "");
    assert_eq!(json["services"][0]["dbCosmosMongo"]["databaseName"], "");
    assert_eq!(json["services"][0]["port"], 80);
    assert!(json["services"][0].get("backend").is_some());
}
