//! Shared application state, built once at startup and handed to every route.

use crate::config::Variant;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub variant: Variant,
}

impl AppState {
    pub fn new(pool: SqlitePool, variant: Variant) -> Self {
        AppState { pool, variant }
    }
}
