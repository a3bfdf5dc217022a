//! SQLite connection setup. The database file is created on first use.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Connect options for `database_url`: create the file when missing and leave
/// foreign-key enforcement off, so rents may reference rows that do not exist.
pub fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, AppError> {
    Ok(SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(false))
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Open a pool. An in-memory database lives inside one connection, so such a
/// pool is pinned to a single connection that is never recycled.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let options = connect_options(database_url)?;
    let mut pool_options = SqlitePoolOptions::new().max_connections(max_connections);
    if is_in_memory(database_url) {
        pool_options = pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }
    let pool = pool_options.connect_with(options).await?;
    tracing::debug!(url = %database_url, "database pool ready");
    Ok(pool)
}
