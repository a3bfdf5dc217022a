use super::{push_present, Entity, Fields, RentOwner};
use crate::error::AppError;
use crate::service::Payload;
use crate::sql::{BindValue, TableDef};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub year: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewMovie {
    pub title: Option<String>,
    pub description: Option<String>,
    pub year: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub year: Option<Option<i64>>,
}

impl Entity for Movie {
    const NAME: &'static str = "movie";
    const COLLECTION: &'static str = "movies";
    const TABLE: TableDef = TableDef {
        name: "movie",
        columns: &["title", "description", "year"],
    };
    type New = NewMovie;
    type Patch = MoviePatch;

    fn id(&self) -> i64 {
        self.id
    }
}

impl RentOwner for Movie {
    const RENT_KEY: &'static str = "movie_id";
}

impl Fields for NewMovie {
    fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        Ok(NewMovie {
            title: payload.required("title")?,
            description: payload.required("description")?,
            year: payload.required("year")?,
        })
    }

    fn into_assignments(self) -> Vec<(&'static str, BindValue)> {
        vec![
            ("title", self.title.into()),
            ("description", self.description.into()),
            ("year", self.year.into()),
        ]
    }
}

impl Fields for MoviePatch {
    fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        Ok(MoviePatch {
            title: payload.optional("title")?,
            description: payload.optional("description")?,
            year: payload.optional("year")?,
        })
    }

    fn into_assignments(self) -> Vec<(&'static str, BindValue)> {
        let mut out = Vec::new();
        push_present(&mut out, "title", self.title);
        push_present(&mut out, "description", self.description);
        push_present(&mut out, "year", self.year);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(v: serde_json::Value) -> Payload {
        Payload::from_value(v).unwrap()
    }

    #[test]
    fn create_requires_every_key() {
        let err = NewMovie::from_payload(&payload(json!({"title": "Up", "year": 2009}))).unwrap_err();
        assert!(matches!(err, AppError::MissingField("description")));

        let m = NewMovie::from_payload(&payload(json!({"title": "Up", "description": null, "year": 2009}))).unwrap();
        assert_eq!(m.description, None);
        assert_eq!(m.year, Some(2009));
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let p = MoviePatch::from_payload(&payload(json!({"year": 2010, "director": "ignored"}))).unwrap();
        assert_eq!(p.into_assignments(), vec![("year", BindValue::Int(2010))]);

        let p = MoviePatch::from_payload(&payload(json!({"description": null}))).unwrap();
        assert_eq!(p.into_assignments(), vec![("description", BindValue::Null)]);
    }

    #[test]
    fn wrong_type_is_invalid_field() {
        let err = MoviePatch::from_payload(&payload(json!({"year": "soon"}))).unwrap_err();
        assert!(matches!(err, AppError::InvalidField { field: "year", .. }));
    }

    #[test]
    fn serializes_declared_fields_in_order() {
        let m = Movie {
            id: 1,
            title: Some("Up".into()),
            description: Some("Pixar film".into()),
            year: Some(2009),
        };
        assert_eq!(
            serde_json::to_string(&m).unwrap(),
            r#"{"id":1,"title":"Up","description":"Pixar film","year":2009}"#
        );
    }
}
