use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;

/// Process-wide shared resources, built once at startup.
///
/// The connection is a pool handle; clones share the same pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self { db, security }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
