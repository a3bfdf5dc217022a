//! Request body access with explicit presence checks per field.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A JSON object request body.
#[derive(Clone, Debug, Default)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        match value {
            Value::Object(m) => Ok(Payload(m)),
            _ => Err(AppError::BadRequest("body must be a JSON object".into())),
        }
    }

    /// Value of a key that must be present. `T = Option<_>` accepts an explicit `null`.
    pub fn required<T: DeserializeOwned>(&self, field: &'static str) -> Result<T, AppError> {
        let v = self.0.get(field).ok_or(AppError::MissingField(field))?;
        decode(field, v)
    }

    /// `None` when the key is absent, otherwise the decoded value.
    pub fn optional<T: DeserializeOwned>(&self, field: &'static str) -> Result<Option<T>, AppError> {
        self.0.get(field).map(|v| decode(field, v)).transpose()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }
}

fn decode<T: DeserializeOwned>(field: &'static str, v: &Value) -> Result<T, AppError> {
    T::deserialize(v).map_err(|e| AppError::InvalidField {
        field,
        reason: e.to_string(),
    })
}
