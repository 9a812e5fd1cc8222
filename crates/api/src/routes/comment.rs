//! Route definitions for the flat `/comments` resource.
//!
//! Only creation is exposed; the owning project comes from the form body.

use axum::routing::post;
use axum::Router;

use super::guarded;
use crate::handlers::comment;
use crate::state::AppState;

/// Routes mounted at `/comments`.
///
/// ```text
/// POST   /                         -> create_flat (login)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", guarded(post(comment::create_flat)))
}
