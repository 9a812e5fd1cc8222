//! Projects & comments web server library.
//!
//! Exposes the building blocks (config, state, error handling, identity
//! middleware, routes) so integration tests and the binary entrypoint can
//! both access them.

pub mod auth;
pub mod config;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod params;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
