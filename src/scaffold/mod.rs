//! Infrastructure specification handed to the renderer.

pub mod spec;

pub use spec::{
    Backend, DatabaseCosmosMongo, DatabasePostgres, DatabaseRedis, DatabaseReference, Frontend,
    InfraSpec, ServiceReference, ServiceRole, ServiceSpec, REDIS_REFERENCE_NAME, UNRESOLVED_PORT,
};
