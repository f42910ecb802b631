//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; repos convert it into
//! `crate::errors::domain::DomainError` here, and handlers then map
//! `DomainError` to `AppError` via `From`.

use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::trace_ctx;

/// Map a unique-constraint message (Postgres index name or SQLite `table.column`)
/// to a domain conflict.
fn unique_conflict(message: &str) -> (ConflictKind, &'static str) {
    if message.contains("idx_users_email_unique") || message.contains("users.email") {
        return (ConflictKind::UniqueEmail, "Email already registered");
    }
    if message.contains("ux_profiles_user_id") || message.contains("profiles.user_id") {
        return (
            ConflictKind::Other("UniqueProfile".into()),
            "Profile already exists for user",
        );
    }
    (ConflictKind::Other("Unique".into()), "Unique constraint violated")
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: DbErr) -> DomainError {
    let trace_id = trace_ctx::trace_id();

    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            let (kind, detail) = unique_conflict(&message);
            warn!(trace_id = %trace_id, kind = ?kind, "unique constraint violation");
            return DomainError::conflict(kind, detail);
        }
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
            warn!(trace_id = %trace_id, "foreign key violation");
            return DomainError::conflict(ConflictKind::ForeignKey, "Referenced record does not exist");
        }
        _ => {}
    }

    match e {
        DbErr::RecordNotFound(what) => {
            DomainError::not_found(NotFoundKind::Other("Record".into()), format!("{what} not found"))
        }
        DbErr::ConnectionAcquire(err) => {
            error!(trace_id = %trace_id, error = %err, "database connection acquire failed");
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
        }
        DbErr::Conn(err) => {
            error!(trace_id = %trace_id, error = %err, "database connection error");
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
        }
        other => {
            error!(trace_id = %trace_id, error = %other, "unhandled database error");
            DomainError::infra(InfraErrorKind::Other("DbErr".into()), other.to_string())
        }
    }
}
