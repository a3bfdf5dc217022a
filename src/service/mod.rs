//! CrudService: generic CRUD over typed entities using the safe SQL builder.

mod crud;
mod payload;
pub use crud::CrudService;
pub use payload::Payload;
