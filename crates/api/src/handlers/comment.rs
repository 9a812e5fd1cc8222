//! Handlers for comment creation.
//!
//! Comments are created through their project:
//! `POST /projects/{project_id}/comments`. The flat `POST /comments` route
//! does the same with the project named in the form body.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use projex_core::error::CoreError;
use projex_core::types::DbId;
use projex_db::services::CommentService;
use projex_db::DbError;

use crate::error::AppResult;
use crate::flash::{self, Notice};
use crate::handlers::project::{project_path, show_page, CommentDraft};
use crate::middleware::auth::CurrentUser;
use crate::params::CommentParams;
use crate::response::{redirect_to, View};
use crate::state::AppState;

/// POST /projects/{project_id}/comments
pub async fn create(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    user: CurrentUser,
    jar: CookieJar,
    Form(params): Form<CommentParams>,
) -> AppResult<Response> {
    create_for_project(&state, project_id, user, jar, params).await
}

/// POST /comments
pub async fn create_flat(
    State(state): State<AppState>,
    user: CurrentUser,
    jar: CookieJar,
    Form(params): Form<CommentParams>,
) -> AppResult<Response> {
    let project_id = params.project_id()?;
    create_for_project(&state, project_id, user, jar, params).await
}

/// Redirect to the project on success; re-render its show page with the
/// comment errors otherwise.
async fn create_for_project(
    state: &AppState,
    project_id: DbId,
    user: CurrentUser,
    jar: CookieJar,
    params: CommentParams,
) -> AppResult<Response> {
    let input = params.to_create();

    match CommentService::create(&state.pool, project_id, &input).await {
        Ok(comment) => {
            tracing::info!(
                comment_id = comment.id,
                project_id,
                user_id = user.user_id,
                "Comment created"
            );
            let jar = flash::set_notice(jar, Notice::CommentCreated);
            Ok((jar, redirect_to(&project_path(project_id))).into_response())
        }
        Err(DbError::Core(CoreError::Validation(errors))) => {
            tracing::debug!(project_id, %errors, "Comment rejected");
            let draft = CommentDraft {
                content: input.content,
            };
            let page = show_page(&state.pool, project_id, draft).await?;
            Ok(View::invalid("projects/show", page, &errors).into_response())
        }
        Err(e) => Err(e.into()),
    }
}
