//! Detection results consumed by synthesis.
//!
//! Detection itself happens elsewhere; this module holds the shape of its
//! output, loads it from a manifest, and tracks which database kinds the
//! user kept.

pub mod confirm;
pub mod manifest;
pub mod types;

pub use confirm::DetectConfirm;
pub use manifest::DetectionManifest;
pub use types::{DatabaseDep, Docker, Framework, Language, Port, Project};
