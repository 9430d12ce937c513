//! Owns the store lifecycle: pool construction and idempotent table
//! creation. There is no migration versioning; schema changes require
//! recreating the store.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::error::DbError;

static SCHEMA_SQL: &str = include_str!("../schema.sql");

/// Build the shared pool. Foreign-key enforcement is switched on for every
/// connection; cascade and set-null rules depend on it.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(DbError::Init)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(DbError::Init)
}

/// Create the six tables if absent. Safe to invoke on every cold start;
/// failure is fatal and the process must not serve requests.
pub async fn initialize(db: &SqlitePool) -> Result<(), DbError> {
    sqlx::raw_sql(SCHEMA_SQL)
        .execute(db)
        .await
        .map_err(DbError::Init)?;
    Ok(())
}
