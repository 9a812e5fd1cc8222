//! Request middleware.
//!
//! - [`auth::resolve_principal`] -- Attaches the signed-in [`auth::CurrentUser`], if any.
//! - [`auth::require_login`] -- Redirects to the login page when nobody is signed in.

pub mod auth;
