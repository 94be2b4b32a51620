//! Confirmed detection results.

use std::collections::BTreeSet;

use super::types::{DatabaseDep, Project};

/// Detection results after the user has reviewed them.
///
/// `databases` may be narrower than the union of the services' database
/// dependencies: kinds the user dropped are removed here and ignored by
/// synthesis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetectConfirm {
    /// Services in detection order.
    pub services: Vec<Project>,
    /// Database kinds to provision.
    pub databases: BTreeSet<DatabaseDep>,
}

impl DetectConfirm {
    /// Confirm every service and every database kind any service uses.
    pub fn from_projects(services: Vec<Project>) -> Self {
        let databases = services
            .iter()
            .flat_map(|p| p.database_deps.iter().copied())
            .collect();
        Self {
            services,
            databases,
        }
    }

    /// Stop considering a database kind.
    ///
    /// Returns whether the kind was present.
    pub fn remove_database(&mut self, db: DatabaseDep) -> bool {
        let removed = self.databases.remove(&db);
        if removed {
            tracing::info!(database = db.display(), "database removed from consideration");
        }
        removed
    }

    /// Whether a database kind is still confirmed.
    pub fn has_database(&self, db: DatabaseDep) -> bool {
        self.databases.contains(&db)
    }
}
