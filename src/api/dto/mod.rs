//! Request and response DTOs for the REST API.

pub mod health;
pub mod rename;
pub mod shorten;
pub mod url_entry;
