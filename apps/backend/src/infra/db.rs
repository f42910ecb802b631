use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

const MEMORY_DB_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// Open a pooled connection for the given profile and owner.
/// This function does NOT run any migrations.
pub async fn connect_db(profile: DbProfile, owner: DbOwner) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile, owner)?;

    let mut opt = ConnectOptions::new(&url);
    opt.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    if profile == DbProfile::InMemory {
        // every sqlite memory connection is its own database; pin the pool to one
        opt.min_connections(1)
            .max_connections(1)
            .idle_timeout(MEMORY_DB_LIFETIME)
            .max_lifetime(MEMORY_DB_LIFETIME);
    } else {
        opt.min_connections(1)
            .max_connections(num_cpus::get() as u32 * 2);
    }

    let conn = Database::connect(opt)
        .await
        .map_err(|e| AppError::config(format!("failed to connect to database ({profile:?}): {e}")))?;

    info!(profile = ?profile, owner = ?owner, "database connected");
    Ok(conn)
}
