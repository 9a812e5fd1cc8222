//! Handlers for the `/projects` resource.
//!
//! Reads render view documents; writes validate through
//! [`ProjectService`] and either redirect with a flash notice or re-render
//! the form with the rejected fields.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use projex_core::error::CoreError;
use projex_core::project::ProjectAttributes;
use projex_core::types::DbId;
use projex_db::models::comment::Comment;
use projex_db::models::project::Project;
use projex_db::services::{CommentService, ProjectService};
use projex_db::{DbError, DbPool};
use serde::Serialize;

use crate::error::AppResult;
use crate::flash::{self, Notice};
use crate::middleware::auth::CurrentUser;
use crate::params::ProjectParams;
use crate::response::{redirect_to, View};
use crate::state::AppState;

/// Collection path, also the redirect target after a delete.
pub const PROJECTS_PATH: &str = "/projects";

/// Show page of a single project.
pub fn project_path(id: DbId) -> String {
    format!("{PROJECTS_PATH}/{id}")
}

// ---------------------------------------------------------------------------
// View data
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ProjectIndex {
    pub projects: Vec<Project>,
}

/// Data for `projects/show`, also re-rendered when a comment is rejected.
#[derive(Debug, Serialize)]
pub struct ProjectShow {
    pub project: Project,
    pub comments: Vec<Comment>,
    /// Current value of the new-comment form.
    pub comment: CommentDraft,
}

#[derive(Debug, Default, Serialize)]
pub struct CommentDraft {
    pub content: String,
}

/// Data for `projects/new` and `projects/edit`.
#[derive(Debug, Serialize)]
pub struct ProjectForm {
    /// `None` while creating.
    pub id: Option<DbId>,
    pub project: ProjectAttributes,
}

/// Load everything the show page needs.
pub async fn show_page(pool: &DbPool, id: DbId, comment: CommentDraft) -> AppResult<ProjectShow> {
    let project = ProjectService::find(pool, id).await?;
    let comments = CommentService::list_for_project(pool, id).await?;
    Ok(ProjectShow {
        project,
        comments,
        comment,
    })
}

// ---------------------------------------------------------------------------
// Read actions (public)
// ---------------------------------------------------------------------------

/// GET /projects (also GET /)
pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
) -> AppResult<(CookieJar, View<ProjectIndex>)> {
    let projects = ProjectService::list(&state.pool).await?;
    let (jar, notice) = flash::take_notice(jar);
    let view = View::render("projects/index", ProjectIndex { projects }).with_notice(notice);
    Ok((jar, view))
}

/// GET /projects/{id}
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    jar: CookieJar,
) -> AppResult<(CookieJar, View<ProjectShow>)> {
    let page = show_page(&state.pool, id, CommentDraft::default()).await?;
    let (jar, notice) = flash::take_notice(jar);
    Ok((jar, View::render("projects/show", page).with_notice(notice)))
}

// ---------------------------------------------------------------------------
// Form actions (behind the login gate)
// ---------------------------------------------------------------------------

/// GET /projects/new
pub async fn new_form(_user: CurrentUser) -> View<ProjectForm> {
    View::render(
        "projects/new",
        ProjectForm {
            id: None,
            project: ProjectAttributes::default(),
        },
    )
}

/// GET /projects/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    _user: CurrentUser,
) -> AppResult<View<ProjectForm>> {
    let project = ProjectService::find(&state.pool, id).await?;
    Ok(View::render(
        "projects/edit",
        ProjectForm {
            id: Some(id),
            project: project.attributes(),
        },
    ))
}

/// POST /projects
pub async fn create(
    State(state): State<AppState>,
    user: CurrentUser,
    jar: CookieJar,
    Form(params): Form<ProjectParams>,
) -> AppResult<Response> {
    let input = params.into_create()?;

    match ProjectService::save(&state.pool, &input).await {
        Ok(project) => {
            tracing::info!(project_id = project.id, user_id = user.user_id, "Project created");
            let jar = flash::set_notice(jar, Notice::ProjectCreated);
            Ok((jar, redirect_to(&project_path(project.id))).into_response())
        }
        Err(DbError::Core(CoreError::Validation(errors))) => {
            tracing::debug!(%errors, "Project rejected");
            let form = ProjectForm {
                id: None,
                project: input,
            };
            Ok(View::invalid("projects/new", form, &errors).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// PATCH|PUT /projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    user: CurrentUser,
    jar: CookieJar,
    Form(params): Form<ProjectParams>,
) -> AppResult<Response> {
    let patch = params.into_patch()?;

    match ProjectService::update(&state.pool, id, &patch).await {
        Ok(project) => {
            tracing::info!(project_id = project.id, user_id = user.user_id, "Project updated");
            let jar = flash::set_notice(jar, Notice::ProjectUpdated);
            Ok((jar, redirect_to(&project_path(project.id))).into_response())
        }
        Err(DbError::Core(CoreError::Validation(errors))) => {
            tracing::debug!(project_id = id, %errors, "Project update rejected");
            // Echo what the user submitted on top of the stored row.
            let stored = ProjectService::find(&state.pool, id).await?;
            let form = ProjectForm {
                id: Some(id),
                project: stored.attributes().merged(&patch),
            };
            Ok(View::invalid("projects/edit", form, &errors).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// DELETE /projects/{id}
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    user: CurrentUser,
    jar: CookieJar,
) -> AppResult<Response> {
    ProjectService::delete(&state.pool, id).await?;
    tracing::info!(project_id = id, user_id = user.user_id, "Project destroyed");

    let jar = flash::set_notice(jar, Notice::ProjectDestroyed);
    Ok((jar, redirect_to(PROJECTS_PATH)).into_response())
}
