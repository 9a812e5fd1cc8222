//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or a connection inside a transaction) as the
//! first argument. Repositories do not validate; see [`crate::services`].

pub mod comment_repo;
pub mod project_repo;

pub use comment_repo::CommentRepo;
pub use project_repo::ProjectRepo;
