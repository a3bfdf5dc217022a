//! Create the tables a variant serves. Statements are idempotent, so the
//! server can restart against an existing database file.

use crate::config::Variant;
use crate::entity::{Client, Entity, Movie, Rent};
use crate::error::AppError;
use sqlx::SqlitePool;

struct ColumnDdl {
    name: &'static str,
    ty: &'static str,
    not_null: bool,
    unique: bool,
    references: Option<&'static str>,
}

fn column(name: &'static str, ty: &'static str) -> ColumnDdl {
    ColumnDdl {
        name,
        ty,
        not_null: false,
        unique: false,
        references: None,
    }
}

impl ColumnDdl {
    fn not_null(mut self, on: bool) -> Self {
        self.not_null = on;
        self
    }

    fn unique(mut self, on: bool) -> Self {
        self.unique = on;
        self
    }

    fn references(mut self, target: Option<&'static str>) -> Self {
        self.references = target;
        self
    }

    fn render(&self) -> String {
        let mut def = format!("\"{}\" {}", self.name, self.ty);
        if self.not_null {
            def.push_str(" NOT NULL");
        }
        if self.unique {
            def.push_str(" UNIQUE");
        }
        if let Some(target) = self.references {
            def.push_str(&format!(" REFERENCES \"{}\"(\"id\")", target));
        }
        def
    }
}

fn create_table(name: &str, columns: &[ColumnDdl]) -> String {
    let mut defs = vec!["\"id\" INTEGER PRIMARY KEY".to_string()];
    defs.extend(columns.iter().map(ColumnDdl::render));
    format!("CREATE TABLE IF NOT EXISTS \"{}\" ({})", name, defs.join(", "))
}

/// DDL for every table of `variant`, in dependency order.
pub fn table_ddl(variant: Variant) -> Vec<String> {
    let strict = variant.strict_schema();
    let mut out = vec![create_table(
        Movie::TABLE.name,
        &[
            column("title", "VARCHAR(60)").not_null(strict),
            column("description", "VARCHAR(250)"),
            column("year", "INTEGER"),
        ],
    )];
    if variant.has_clients() {
        out.push(create_table(
            Client::TABLE.name,
            &[
                column("name", "VARCHAR(50)").not_null(strict).unique(strict),
                column("address", "VARCHAR(60)").not_null(strict),
                column("phone", "VARCHAR(16)"),
            ],
        ));
    }
    if variant.has_rents() {
        out.push(create_table(
            Rent::TABLE.name,
            &[
                column("movie_id", "INTEGER").references(Some(Movie::TABLE.name)),
                column("client_id", "INTEGER").references(Some(Client::TABLE.name)),
                column("notes", "VARCHAR(128)"),
            ],
        ));
    }
    out
}

pub async fn apply_migrations(pool: &SqlitePool, variant: Variant) -> Result<(), AppError> {
    for ddl in table_ddl(variant) {
        tracing::debug!(sql = %ddl, "migration");
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::info!(%variant, "schema ready");
    Ok(())
}
