//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from a table definition.

use super::BindValue;

/// Primary key column shared by every entity table.
pub const PK: &str = "id";

/// Static description of an entity table. `columns` are the data columns in
/// output order and never include the primary key.
#[derive(Clone, Copy, Debug)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

impl TableDef {
    pub fn has_column(&self, column: &str) -> bool {
        column == PK || self.columns.contains(&column)
    }
}

/// Quote identifier for SQLite (safe: only from table definitions).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new(sql: String) -> Self {
        QueryBuf {
            sql,
            params: Vec::new(),
        }
    }
}

/// `id` followed by the data columns, in declaration order.
fn select_column_list(table: &TableDef) -> String {
    std::iter::once(PK)
        .chain(table.columns.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row ordered by primary key.
pub fn select_list(table: &TableDef) -> QueryBuf {
    QueryBuf::new(format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        quoted(PK)
    ))
}

/// SELECT by primary key.
pub fn select_by_id(table: &TableDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new(format!(
        "SELECT {} FROM {} WHERE {} = ?",
        select_column_list(table),
        quoted(table.name),
        quoted(PK)
    ));
    q.params.push(BindValue::Int(id));
    q
}

/// SELECT rows where an integer column equals `value`. Used to walk foreign keys.
pub fn select_by_column(table: &TableDef, column: &str, value: i64) -> QueryBuf {
    debug_assert!(table.has_column(column));
    let mut q = QueryBuf::new(format!(
        "SELECT {} FROM {} WHERE {} = ? ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        quoted(column),
        quoted(PK)
    ));
    q.params.push(BindValue::Int(value));
    q
}

/// INSERT one row and return it. An empty assignment list inserts defaults.
pub fn insert(table: &TableDef, assignments: Vec<(&'static str, BindValue)>) -> QueryBuf {
    let returning = select_column_list(table);
    if assignments.is_empty() {
        return QueryBuf::new(format!(
            "INSERT INTO {} DEFAULT VALUES RETURNING {}",
            quoted(table.name),
            returning
        ));
    }
    let mut q = QueryBuf::new(String::new());
    let mut cols = Vec::with_capacity(assignments.len());
    for (col, value) in assignments {
        cols.push(quoted(col));
        q.params.push(value);
    }
    let placeholders = vec!["?"; cols.len()].join(", ");
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table.name),
        cols.join(", "),
        placeholders,
        returning
    );
    q
}

/// UPDATE the given columns of one row and return it. Caller must not pass an
/// empty assignment list.
pub fn update(table: &TableDef, id: i64, assignments: Vec<(&'static str, BindValue)>) -> QueryBuf {
    debug_assert!(!assignments.is_empty());
    let mut q = QueryBuf::new(String::new());
    let mut sets = Vec::with_capacity(assignments.len());
    for (col, value) in assignments {
        sets.push(format!("{} = ?", quoted(col)));
        q.params.push(value);
    }
    q.params.push(BindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ? RETURNING {}",
        quoted(table.name),
        sets.join(", "),
        quoted(PK),
        select_column_list(table)
    );
    q
}

/// DELETE by primary key, returning the removed id.
pub fn delete(table: &TableDef, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new(format!(
        "DELETE FROM {} WHERE {} = ? RETURNING {}",
        quoted(table.name),
        quoted(PK),
        quoted(PK)
    ));
    q.params.push(BindValue::Int(id));
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVIE: TableDef = TableDef {
        name: "movie",
        columns: &["title", "description", "year"],
    };

    #[test]
    fn select_lists_id_first() {
        let q = select_list(&MOVIE);
        assert_eq!(
            q.sql,
            r#"SELECT "id", "title", "description", "year" FROM "movie" ORDER BY "id""#
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn insert_binds_in_order() {
        let q = insert(
            &MOVIE,
            vec![
                ("title", BindValue::Text("Up".into())),
                ("description", BindValue::Null),
                ("year", BindValue::Int(2009)),
            ],
        );
        assert_eq!(
            q.sql,
            r#"INSERT INTO "movie" ("title", "description", "year") VALUES (?, ?, ?) RETURNING "id", "title", "description", "year""#
        );
        assert_eq!(
            q.params,
            vec![BindValue::Text("Up".into()), BindValue::Null, BindValue::Int(2009)]
        );
    }

    #[test]
    fn insert_without_columns_uses_defaults() {
        let q = insert(&MOVIE, Vec::new());
        assert!(q.sql.starts_with(r#"INSERT INTO "movie" DEFAULT VALUES"#));
    }

    #[test]
    fn update_puts_id_last() {
        let q = update(&MOVIE, 4, vec![("year", BindValue::Int(2010))]);
        assert_eq!(
            q.sql,
            r#"UPDATE "movie" SET "year" = ? WHERE "id" = ? RETURNING "id", "title", "description", "year""#
        );
        assert_eq!(q.params, vec![BindValue::Int(2010), BindValue::Int(4)]);
    }

    #[test]
    fn delete_and_lookup_by_column() {
        let q = delete(&MOVIE, 9);
        assert_eq!(q.sql, r#"DELETE FROM "movie" WHERE "id" = ? RETURNING "id""#);
        assert_eq!(q.params, vec![BindValue::Int(9)]);

        let rent = TableDef {
            name: "rent",
            columns: &["movie_id", "client_id", "notes"],
        };
        let q = select_by_column(&rent, "movie_id", 3);
        assert!(q.sql.ends_with(r#"WHERE "movie_id" = ? ORDER BY "id""#));
    }
}
