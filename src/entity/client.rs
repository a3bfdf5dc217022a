use super::{push_present, Entity, Fields, RentOwner};
use crate::error::AppError;
use crate::service::Payload;
use crate::sql::{BindValue, TableDef};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewClient {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientPatch {
    pub name: Option<Option<String>>,
    pub address: Option<Option<String>>,
    pub phone: Option<Option<String>>,
}

impl Entity for Client {
    const NAME: &'static str = "client";
    const COLLECTION: &'static str = "clients";
    const TABLE: TableDef = TableDef {
        name: "client",
        columns: &["name", "address", "phone"],
    };
    type New = NewClient;
    type Patch = ClientPatch;

    fn id(&self) -> i64 {
        self.id
    }
}

impl RentOwner for Client {
    const RENT_KEY: &'static str = "client_id";
}

impl Fields for NewClient {
    fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        Ok(NewClient {
            name: payload.required("name")?,
            address: payload.required("address")?,
            phone: payload.required("phone")?,
        })
    }

    fn into_assignments(self) -> Vec<(&'static str, BindValue)> {
        vec![
            ("name", self.name.into()),
            ("address", self.address.into()),
            ("phone", self.phone.into()),
        ]
    }
}

impl Fields for ClientPatch {
    fn from_payload(payload: &Payload) -> Result<Self, AppError> {
        Ok(ClientPatch {
            name: payload.optional("name")?,
            address: payload.optional("address")?,
            phone: payload.optional("phone")?,
        })
    }

    fn into_assignments(self) -> Vec<(&'static str, BindValue)> {
        let mut out = Vec::new();
        push_present(&mut out, "name", self.name);
        push_present(&mut out, "address", self.address);
        push_present(&mut out, "phone", self.phone);
        out
    }
}
