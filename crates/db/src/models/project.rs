//! Project entity model and DTOs.

use projex_core::project::ProjectAttributes;
use projex_core::types::{Date, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// DTO for inserting a project. Validated before it reaches the repository.
pub type CreateProject = ProjectAttributes;

/// DTO for a partial project update.
pub use projex_core::project::ProjectPatch as UpdateProject;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub rating: Option<i32>,
    pub date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// The writable subset of this row.
    pub fn attributes(&self) -> ProjectAttributes {
        ProjectAttributes {
            title: self.title.clone(),
            description: self.description.clone(),
            rating: self.rating,
            date: self.date,
        }
    }
}
