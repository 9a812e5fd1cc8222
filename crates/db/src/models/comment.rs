//! Comment entity model and DTOs.

use projex_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A comment row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub project_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a comment. The owning project comes from the caller.
#[derive(Debug, Clone, Default)]
pub struct CreateComment {
    pub content: String,
}
