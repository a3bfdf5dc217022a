use super::{push_present, Entity, Fields};
use crate::error::AppError;
use crate::service::Payload;
use crate::sql::{BindValue, TableDef};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A rental record linking a movie and a client. Neither id is checked for
/// existence on write.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Rent {
    pub id: i64,
    pub movie_id: Option<i64>,
    pub client_id: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewRent {
    pub movie_id: Option<i64>,
    pub client_id: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RentPatch {
    pub movie_id: Option<Option<i64>>,
    pub client_id: Option<Option<i64>>,
    pub notes: Option<Option<String>>,
}

impl Entity for Rent {
    const NAME: &'static str = "rent";
    const COLLECTION: &'static str = "rents";
    const TABLE: TableDef = TableDef {
        name: "rent",
        columns: &["movie_id", "client_id", "notes"],
    };
    type New = NewRent;
    type Patch = RentPatch;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Fields for NewRent {
    fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        Ok(NewRent {
            movie_id: payload.required("movie_id")?,
            client_id: payload.required("client_id")?,
            notes: payload.required("notes")?,
        })
    }

    fn into_assignments(self) -> Vec<(&'static str, BindValue)> {
        vec![
            ("movie_id", self.movie_id.into()),
            ("client_id", self.client_id.into()),
            ("notes", self.notes.into()),
        ]
    }
}

impl Fields for RentPatch {
    fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        Ok(RentPatch {
            movie_id: payload.optional("movie_id")?,
            client_id: payload.optional("client_id")?,
            notes: payload.optional("notes")?,
        })
    }

    fn into_assignments(self) -> Vec<(&'static str, BindValue)> {
        let mut out = Vec::new();
        push_present(&mut out, "movie_id", self.movie_id);
        push_present(&mut out, "client_id", self.client_id);
        push_present(&mut out, "notes", self.notes);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_must_be_integers() {
        let p = Payload::from_value(json!({"movie_id": "one", "client_id": 1, "notes": null})).unwrap();
        let err = NewRent::from_payload(&p).unwrap_err();
        assert!(matches!(err, AppError::InvalidField { field: "movie_id", .. }));
    }

    #[test]
    fn patch_keeps_column_order() {
        let p = Payload::from_value(json!({"notes": "late", "movie_id": 5})).unwrap();
        let cols: Vec<_> = RentPatch::from_payload(&p)
            .unwrap()
            .into_assignments()
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(cols, vec!["movie_id", "notes"]);
    }
}
