//! Infrastructure specification model.
//!
//! An [`InfraSpec`] is the hand-off to the renderer: it describes each
//! service, its port, its role in the frontend/backend graph, and the
//! databases it binds to.

use schemars::JsonSchema;
use serde::{Serialize, Serializer};

use crate::error::{Result, SkyforgeError};

/// Port value written for a service whose port was never resolved.
pub const UNRESOLVED_PORT: i32 = -1;

/// Database name every Redis reference carries.
pub const REDIS_REFERENCE_NAME: &str = "redis";

/// Synthesized infrastructure for one application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfraSpec {
    /// Services in detection order.
    pub services: Vec<ServiceSpec>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_postgres: Option<DatabasePostgres>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cosmos_mongo: Option<DatabaseCosmosMongo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_redis: Option<DatabaseRedis>,
}

/// One deployable service.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSpec {
    pub name: String,

    /// `None` until the port is resolved.
    #[serde(serialize_with = "serialize_port")]
    #[schemars(with = "i32")]
    pub port: Option<u16>,

    #[serde(flatten)]
    pub role: Option<ServiceRole>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_postgres: Option<DatabaseReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_cosmos_mongo: Option<DatabaseReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_redis: Option<DatabaseReference>,
}

/// Whether a service faces users or serves other services.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ServiceRole {
    Frontend(Frontend),
    Backend(Backend),
}

/// Frontend marker with the backends it calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct Frontend {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub backends: Vec<ServiceReference>,
}

/// Backend marker with the frontends that call it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
pub struct Backend {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frontends: Vec<ServiceReference>,
}

/// Reference to another service by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ServiceReference {
    pub name: String,
}

impl ServiceReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A service's binding to a root database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseReference {
    pub database_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabasePostgres {
    pub database_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseCosmosMongo {
    /// May be empty, in which case no database is created.
    pub database_name: String,
}

/// Redis has nothing to configure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct DatabaseRedis {}

fn serialize_port<S: Serializer>(port: &Option<u16>, s: S) -> std::result::Result<S::Ok, S::Error> {
    match port {
        Some(p) => s.serialize_i32(i32::from(*p)),
        None => s.serialize_i32(UNRESOLVED_PORT),
    }
}

impl ServiceSpec {
    /// A service with an unresolved port and no role.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            port: None,
            role: None,
            db_postgres: None,
            db_cosmos_mongo: None,
            db_redis: None,
        }
    }

    pub fn frontend(&self) -> Option<&Frontend> {
        match &self.role {
            Some(ServiceRole::Frontend(f)) => Some(f),
            _ => None,
        }
    }

    pub fn backend(&self) -> Option<&Backend> {
        match &self.role {
            Some(ServiceRole::Backend(b)) => Some(b),
            _ => None,
        }
    }

    pub fn is_frontend(&self) -> bool {
        self.frontend().is_some()
    }

    pub fn is_backend(&self) -> bool {
        self.backend().is_some()
    }
}

impl InfraSpec {
    /// Look up a service by name.
    pub fn service(&self, name: &str) -> Option<&ServiceSpec> {
        self.services.iter().find(|s| s.name == name)
    }

    /// Check the invariants of a finished spec.
    ///
    /// Every port is resolved, every service has exactly one role, and every
    /// database reference matches its root database by name.
    pub fn validate(&self) -> Result<()> {
        for svc in &self.services {
            if svc.port.is_none() {
                return Err(invalid(format!("service '{}' has no port", svc.name)));
            }
            if svc.role.is_none() {
                return Err(invalid(format!(
                    "service '{}' is neither frontend nor backend",
                    svc.name
                )));
            }

            check_reference(
                &svc.name,
                "PostgreSQL",
                svc.db_postgres.as_ref(),
                self.db_postgres.as_ref().map(|d| d.database_name.as_str()),
            )?;
            check_reference(
                &svc.name,
                "MongoDB",
                svc.db_cosmos_mongo.as_ref(),
                self.db_cosmos_mongo
                    .as_ref()
                    .map(|d| d.database_name.as_str()),
            )?;
            check_reference(
                &svc.name,
                "Redis",
                svc.db_redis.as_ref(),
                self.db_redis.as_ref().map(|_| REDIS_REFERENCE_NAME),
            )?;
        }
        Ok(())
    }
}

fn check_reference(
    service: &str,
    kind: &str,
    reference: Option<&DatabaseReference>,
    root: Option<&str>,
) -> Result<()> {
    match (reference, root) {
        (None, _) => Ok(()),
        (Some(r), Some(name)) if r.database_name == name => Ok(()),
        (Some(r), Some(name)) => Err(invalid(format!(
            "service '{}' references {} database '{}' but the spec defines '{}'",
            service, kind, r.database_name, name
        ))),
        (Some(_), None) => Err(invalid(format!(
            "service '{}' references a {} database the spec does not define",
            service, kind
        ))),
    }
}

fn invalid(message: String) -> SkyforgeError {
    SkyforgeError::ConfigValidationError { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(name: &str, port: u16) -> ServiceSpec {
        let mut svc = ServiceSpec::new(name);
        svc.port = Some(port);
        svc.role = Some(ServiceRole::Backend(Backend::default()));
        svc
    }

    #[test]
    fn unresolved_port_serializes_as_sentinel() {
        let svc = ServiceSpec::new("api");
        let json = serde_json::to_value(&svc).unwrap();
        assert_eq!(json["port"], -1);
    }

    #[test]
    fn role_serializes_as_field() {
        let mut svc = backend("api", 80);
        svc.role = Some(ServiceRole::Backend(Backend {
            frontends: vec![ServiceReference::new("web")],
        }));
        let json = serde_json::to_value(&svc).unwrap();
        assert_eq!(json["port"], 80);
        assert_eq!(json["backend"]["frontends"][0]["name"], "web");
        assert!(json.get("frontend").is_none());
    }

    #[test]
    fn empty_frontend_serializes_as_empty_object() {
        let mut svc = ServiceSpec::new("web");
        svc.port = Some(80);
        svc.role = Some(ServiceRole::Frontend(Frontend::default()));
        let json = serde_json::to_value(&svc).unwrap();
        assert_eq!(json["frontend"], serde_json::json!({}));
    }

    #[test]
    fn database_reference_uses_camel_case() {
        let mut svc = backend("api", 80);
        svc.db_cosmos_mongo = Some(DatabaseReference {
            database_name: "tododb".into(),
        });
        let json = serde_json::to_value(&svc).unwrap();
        assert_eq!(json["dbCosmosMongo"]["databaseName"], "tododb");
    }

    #[test]
    fn role_accessors() {
        let svc = backend("api", 80);
        assert!(svc.is_backend());
        assert!(!svc.is_frontend());
        assert!(svc.frontend().is_none());
    }

    #[test]
    fn validate_accepts_consistent_spec() {
        let mut svc = backend("api", 80);
        svc.db_postgres = Some(DatabaseReference {
            database_name: "appdb".into(),
        });
        let spec = InfraSpec {
            services: vec![svc],
            db_postgres: Some(DatabasePostgres {
                database_name: "appdb".into(),
            }),
            ..Default::default()
        };
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn validate_rejects_unresolved_port() {
        let mut svc = backend("api", 80);
        svc.port = None;
        let spec = InfraSpec {
            services: vec![svc],
            ..Default::default()
        };
        assert!(spec.validate().unwrap_err().to_string().contains("no port"));
    }

    #[test]
    fn validate_rejects_missing_role() {
        let mut svc = ServiceSpec::new("api");
        svc.port = Some(80);
        let spec = InfraSpec {
            services: vec![svc],
            ..Default::default()
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn validate_rejects_mismatched_reference() {
        let mut svc = backend("api", 80);
        svc.db_postgres = Some(DatabaseReference {
            database_name: "other".into(),
        });
        let spec = InfraSpec {
            services: vec![svc],
            db_postgres: Some(DatabasePostgres {
                database_name: "appdb".into(),
            }),
            ..Default::default()
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn validate_rejects_dangling_redis_reference() {
        let mut svc = backend("cache-user", 80);
        svc.db_redis = Some(DatabaseReference {
            database_name: REDIS_REFERENCE_NAME.into(),
        });
        let spec = InfraSpec {
            services: vec![svc],
            ..Default::default()
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn service_lookup_by_name() {
        let spec = InfraSpec {
            services: vec![backend("a", 80), backend("b", 81)],
            ..Default::default()
        };
        assert_eq!(spec.service("b").and_then(|s| s.port), Some(81));
        assert!(spec.service("c").is_none());
    }
}
