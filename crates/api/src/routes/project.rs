//! Route definitions for the `/projects` resource.
//!
//! Also nests comment creation under `/projects/{id}/comments`.

use axum::routing::{get, patch, post};
use axum::Router;

use super::guarded;
use crate::handlers::{comment, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                         -> index
/// POST   /                         -> create      (login)
/// GET    /new                      -> new_form    (login)
/// GET    /{id}                     -> show
/// PATCH  /{id}                     -> update      (login)
/// PUT    /{id}                     -> update      (login)
/// DELETE /{id}                     -> destroy     (login)
/// GET    /{id}/edit                -> edit_form   (login)
///
/// POST   /{id}/comments            -> comment::create (login)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(project::index).merge(guarded(post(project::create))),
        )
        .route("/new", guarded(get(project::new_form)))
        .route(
            "/{id}",
            get(project::show).merge(guarded(
                patch(project::update)
                    .put(project::update)
                    .delete(project::destroy),
            )),
        )
        .route("/{id}/edit", guarded(get(project::edit_form)))
        .route("/{id}/comments", guarded(post(comment::create)))
}
