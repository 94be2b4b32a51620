//! Root database resolution.

use crate::detection::DatabaseDep;
use crate::error::Result;
use crate::scaffold::{DatabaseCosmosMongo, DatabasePostgres, DatabaseRedis, InfraSpec};
use crate::ui::Console;

use super::db_name::{name_key, prompt_db_name};

/// Populate the root database entries of `spec` for each confirmed kind.
///
/// Redis needs no input. MongoDB takes one name, which may be empty.
/// PostgreSQL insists on a non-empty name. Entries are written as soon as
/// they are resolved, so an error leaves earlier kinds in place.
pub fn resolve_databases<I>(console: &mut Console<'_>, kinds: I, spec: &mut InfraSpec) -> Result<()>
where
    I: IntoIterator<Item = DatabaseDep>,
{
    for db in kinds {
        match db {
            DatabaseDep::Redis => {
                spec.db_redis = Some(DatabaseRedis::default());
            }
            DatabaseDep::Mongo => {
                let database_name = prompt_db_name(console, db)?;
                spec.db_cosmos_mongo = Some(DatabaseCosmosMongo { database_name });
            }
            DatabaseDep::Postgres => {
                let database_name = prompt_required_db_name(console, db)?;
                spec.db_postgres = Some(DatabasePostgres { database_name });
            }
        }
        tracing::debug!(database = db.display(), "database resolved");
    }
    Ok(())
}

fn prompt_required_db_name(console: &mut Console<'_>, db: DatabaseDep) -> Result<String> {
    loop {
        let name = prompt_db_name(console, db)?;
        if !name.is_empty() {
            return Ok(name);
        }
        console.reject(&name_key(db), "Database name is required.")?;
    }
}
