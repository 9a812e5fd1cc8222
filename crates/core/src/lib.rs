//! Domain types, errors, and pure validation logic for projects and comments.
//!
//! Nothing in this crate performs I/O; the db and api crates build on it.

pub mod comment;
pub mod error;
pub mod project;
pub mod types;
pub mod validation;
