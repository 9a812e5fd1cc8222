//! Project lifecycle: save, update, delete.

use projex_core::error::CoreError;
use projex_core::project::ENTITY;
use projex_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::ProjectRepo;
use crate::DbError;

pub struct ProjectService;

impl ProjectService {
    /// Validate `input` and insert it. Nothing is written when validation fails.
    pub async fn save(pool: &PgPool, input: &CreateProject) -> Result<Project, DbError> {
        input.validate().map_err(CoreError::from)?;
        let project = ProjectRepo::create(pool, input).await?;
        tracing::debug!(project_id = project.id, "Project inserted");
        Ok(project)
    }

    pub async fn find(pool: &PgPool, id: DbId) -> Result<Project, DbError> {
        ProjectRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, DbError> {
        Ok(ProjectRepo::list(pool).await?)
    }

    /// Merge `patch` onto the stored project, validate the result, and write it.
    ///
    /// Runs in one transaction holding the row lock; on validation failure
    /// the transaction is dropped and the stored row is unchanged.
    pub async fn update(pool: &PgPool, id: DbId, patch: &UpdateProject) -> Result<Project, DbError> {
        let mut tx = pool.begin().await?;

        let current = ProjectRepo::find_for_update(&mut *tx, id)
            .await?
            .ok_or_else(|| not_found(id))?;

        let merged = current.attributes().merged(patch);
        merged.validate().map_err(CoreError::from)?;

        let project = ProjectRepo::update(&mut *tx, id, &merged)
            .await?
            .ok_or_else(|| not_found(id))?;

        tx.commit().await?;
        tracing::debug!(project_id = id, "Project updated");
        Ok(project)
    }

    /// Delete a project and, through the foreign key, all of its comments.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), DbError> {
        if ProjectRepo::delete(pool, id).await? {
            tracing::debug!(project_id = id, "Project deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: DbId) -> DbError {
    DbError::Core(CoreError::NotFound { entity: ENTITY, id })
}
