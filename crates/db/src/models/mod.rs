//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` row struct matching what the repository selects (for
//!   joined entities this includes the related columns)
//! - A `Serialize` wire shape when it differs from the row
//! - A `Deserialize` + `Validate` create DTO; updates replace the same
//!   writable fields, so the update DTO is an alias of it

pub mod client;
pub mod employee;
pub mod favour;
pub mod project;
pub mod project_service;
pub mod review;
pub mod user;
pub mod user_profile;
