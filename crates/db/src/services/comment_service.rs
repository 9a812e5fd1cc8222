//! Comment creation through the owning project.

use projex_core::comment::validate_comment;
use projex_core::error::CoreError;
use projex_core::project;
use projex_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};
use crate::repositories::{CommentRepo, ProjectRepo};
use crate::DbError;

/// PostgreSQL `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub struct CommentService;

impl CommentService {
    /// Attach a comment to an existing project.
    ///
    /// Fails with `NotFound` when the project does not exist (including when
    /// it is deleted between the existence check and the insert), and with
    /// `Validation` when the content is blank.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, DbError> {
        if ProjectRepo::find_by_id(pool, project_id).await?.is_none() {
            return Err(project_not_found(project_id));
        }

        validate_comment(Some(&input.content)).map_err(CoreError::from)?;

        match CommentRepo::create(pool, project_id, input).await {
            Ok(comment) => {
                tracing::debug!(comment_id = comment.id, project_id, "Comment inserted");
                Ok(comment)
            }
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) =>
            {
                Err(project_not_found(project_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list_for_project(pool: &PgPool, project_id: DbId) -> Result<Vec<Comment>, DbError> {
        Ok(CommentRepo::list_by_project(pool, project_id).await?)
    }
}

fn project_not_found(id: DbId) -> DbError {
    DbError::Core(CoreError::NotFound {
        entity: project::ENTITY,
        id,
    })
}
