//! Generic CRUD execution against SQLite.

use crate::entity::{Entity, Fields};
use crate::error::AppError;
use crate::sql::{self, QueryBuf};
use sqlx::{Sqlite, SqlitePool};

pub struct CrudService;

impl CrudService {
    /// All rows of the entity, ordered by id.
    pub async fn list<E: Entity>(pool: &SqlitePool) -> Result<Vec<E>, AppError> {
        Self::query_many(pool, sql::select_list(&E::TABLE)).await
    }

    /// Rows whose integer `column` equals `value`. Used for foreign-key traversal.
    pub async fn list_where<E: Entity>(
        pool: &SqlitePool,
        column: &str,
        value: i64,
    ) -> Result<Vec<E>, AppError> {
        Self::query_many(pool, sql::select_by_column(&E::TABLE, column, value)).await
    }

    /// Fetch one row by primary key.
    pub async fn read<E: Entity>(pool: &SqlitePool, id: i64) -> Result<Option<E>, AppError> {
        Self::query_one(pool, sql::select_by_id(&E::TABLE, id)).await
    }

    /// Insert one row with a freshly generated id. Returns the created row.
    pub async fn create<E: Entity>(pool: &SqlitePool, input: E::New) -> Result<E, AppError> {
        let q = sql::insert(&E::TABLE, input.into_assignments());
        let row: E = Self::query_one(pool, q)
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))?;
        tracing::info!(entity = E::NAME, id = row.id(), "created");
        Ok(row)
    }

    /// Overwrite the fields present in `patch` in a single statement. Returns
    /// the post-update row, or None when the id does not exist.
    pub async fn update<E: Entity>(
        pool: &SqlitePool,
        id: i64,
        patch: E::Patch,
    ) -> Result<Option<E>, AppError> {
        let assignments = patch.into_assignments();
        if assignments.is_empty() {
            return Self::read(pool, id).await;
        }
        let row = Self::query_one(pool, sql::update(&E::TABLE, id, assignments)).await?;
        if row.is_some() {
            tracing::info!(entity = E::NAME, id, "updated");
        }
        Ok(row)
    }

    /// Delete one row by id. Returns whether a row was removed.
    pub async fn delete<E: Entity>(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let q = sql::delete(&E::TABLE, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_scalar::<Sqlite, i64>(&q.sql);
        for p in q.params {
            query = query.bind(p);
        }
        let removed = query.fetch_optional(pool).await?.is_some();
        if removed {
            tracing::info!(entity = E::NAME, id, "deleted");
        }
        Ok(removed)
    }

    async fn query_one<E: Entity>(pool: &SqlitePool, q: QueryBuf) -> Result<Option<E>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<Sqlite, E>(&q.sql);
        for p in q.params {
            query = query.bind(p);
        }
        Ok(query.fetch_optional(pool).await?)
    }

    async fn query_many<E: Entity>(pool: &SqlitePool, q: QueryBuf) -> Result<Vec<E>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<Sqlite, E>(&q.sql);
        for p in q.params {
            query = query.bind(p);
        }
        Ok(query.fetch_all(pool).await?)
    }
}
