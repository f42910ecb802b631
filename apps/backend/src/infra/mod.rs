//! Infrastructure layer - database connection, schema sync, state assembly.

pub mod db;
pub mod db_errors;
pub mod migrate;
pub mod state;
