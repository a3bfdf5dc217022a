//! Movie rental REST backend: movies, clients and rents over SQLite.

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{ServerConfig, Variant};
pub use entity::{Client, Entity, Movie, Rent};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{app, common_routes, entity_routes};
pub use service::CrudService;
pub use state::AppState;
