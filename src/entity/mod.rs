//! Persisted entities and the traits the generic CRUD layer works through.

mod client;
mod movie;
mod rent;

pub use client::{Client, ClientPatch, NewClient};
pub use movie::{Movie, MoviePatch, NewMovie};
pub use rent::{NewRent, Rent, RentPatch};

use crate::error::AppError;
use crate::service::Payload;
use crate::sql::{BindValue, TableDef};
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;

/// A row type with a generated integer `id`, exposed as a collection
/// (`/{COLLECTION}`) and an item (`/{NAME}/{id}`).
///
/// Serialization of the row struct is the response body: fields appear in
/// declaration order and nothing else is emitted.
pub trait Entity: for<'r> FromRow<'r, SqliteRow> + Serialize + Send + Sync + Unpin + 'static {
    /// Singular name; also the table name and the item path segment.
    const NAME: &'static str;
    const COLLECTION: &'static str;
    const TABLE: TableDef;

    /// Create input: every data field key must be present.
    type New: Fields;
    /// Update input: each field either absent (kept) or present (overwritten).
    type Patch: Fields;

    fn id(&self) -> i64;
}

/// Typed request input for one entity.
pub trait Fields: Sized + Send + 'static {
    fn from_payload(payload: &Payload) -> Result<Self, AppError>;

    /// Column assignments to write, in table column order.
    fn into_assignments(self) -> Vec<(&'static str, BindValue)>;
}

/// Entities that rent records point at through a foreign key column.
pub trait RentOwner: Entity {
    /// Column of `rent` holding this entity's id.
    const RENT_KEY: &'static str;
}

/// Push `(column, value)` when the patch field was present in the payload.
pub(crate) fn push_present<T: Into<BindValue>>(
    out: &mut Vec<(&'static str, BindValue)>,
    column: &'static str,
    field: Option<T>,
) {
    if let Some(value) = field {
        out.push((column, value.into()));
    }
}
