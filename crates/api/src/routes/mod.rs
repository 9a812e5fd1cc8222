pub mod comment;
pub mod health;
pub mod project;

use axum::middleware::from_fn;
use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers;
use crate::middleware::auth::require_login;
use crate::state::AppState;

/// Build the application route table.
///
/// Route hierarchy:
///
/// ```text
/// /                                       projects#index
/// /projects                               index, create*
/// /projects/new                           new*
/// /projects/{id}                          show, update* (PATCH, PUT), destroy*
/// /projects/{id}/edit                     edit*
/// /projects/{id}/comments                 comments#create*
/// /comments                               comments#create* (project_id in body)
/// /users/sign_in                          login entry point
///
/// * behind the login gate
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::project::index))
        .nest("/projects", project::router())
        .nest("/comments", comment::router())
        .route("/users/sign_in", get(handlers::session::sign_in))
}

/// Put `methods` behind the login gate.
///
/// Only the methods registered on this router are gated; merge the result
/// with an ungated router to mix public and protected verbs on one path.
pub fn guarded(methods: MethodRouter<AppState>) -> MethodRouter<AppState> {
    methods.route_layer(from_fn(require_login))
}
