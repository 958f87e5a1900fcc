//! Shared domain primitives for the agency service.
//!
//! Holds the types, error enum, well-known value sets and field validators
//! used by both the database layer and the HTTP layer.

pub mod catalog;
pub mod error;
pub mod identity;
pub mod review;
pub mod types;
pub mod validation;
