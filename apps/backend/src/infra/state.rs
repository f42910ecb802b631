use sea_orm::DatabaseConnection;

use crate::config::db::{DbOwner, DbProfile};
use crate::error::AppError;
use crate::infra::migrate::{bootstrap_db, run_migration};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

enum DbSource {
    Profile(DbProfile),
    Connection(DatabaseConnection),
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    db: Option<DbSource>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            db: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db = Some(DbSource::Profile(profile));
        self
    }

    /// Use an already-open connection; it is still migrated on `build`.
    pub fn with_connection(mut self, conn: DatabaseConnection) -> Self {
        self.db = Some(DbSource::Connection(conn));
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    /// Connect and run the schema sync. Any failure means the state is unusable.
    pub async fn build(self) -> Result<AppState, AppError> {
        let conn = match self.db {
            Some(DbSource::Profile(profile)) => bootstrap_db(profile, DbOwner::App).await?,
            Some(DbSource::Connection(conn)) => {
                run_migration(&conn).await?;
                conn
            }
            None => return Err(AppError::config("no database configured for AppState")),
        };
        Ok(AppState::new(conn, self.security_config))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn build_requires_a_database() {
        let err = build_state().build().await.unwrap_err();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[tokio::test]
    async fn build_with_in_memory_db_migrates() {
        let state = build_state()
            .with_db(DbProfile::InMemory)
            .build()
            .await
            .unwrap();
        let applied = migration::count_applied_migrations(state.db()).await.unwrap();
        assert!(applied > 0);
    }
}
