//! Identity primitives.
//!
//! Accounts and sign-in live in an external identity service; this server
//! only verifies the access tokens it issues. See [`jwt`].

pub mod jwt;
