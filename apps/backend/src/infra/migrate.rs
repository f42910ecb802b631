//! Startup schema synchronization.

use migration::{count_applied_migrations, migrate, MigrationCommand, Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tracing::{error, info};

use crate::config::db::{DbOwner, DbProfile};
use crate::error::AppError;
use crate::infra::db::connect_db;

/// Bring the schema up to date with every declared migration.
///
/// Safe to call repeatedly: an up-to-date database applies nothing. Callers at
/// startup must treat an error as fatal.
pub async fn run_migration(db: &DatabaseConnection) -> Result<(), AppError> {
    match migrate(db, MigrationCommand::Up).await {
        Ok(()) => {
            let applied = count_applied_migrations(db).await.unwrap_or(0);
            info!(
                applied,
                defined = Migrator::migrations().len(),
                "migration=success"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "migration=failed");
            Err(AppError::config(format!("schema migration failed: {e}")))
        }
    }
}

/// Connect and migrate: the single entrypoint for getting a usable connection.
pub async fn bootstrap_db(profile: DbProfile, owner: DbOwner) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, owner).await?;
    run_migration(&conn).await?;
    Ok(conn)
}
