//! Validate-then-write operations.
//!
//! Services are the only write path the api layer uses: each one runs the
//! pure validators from `projex_core` before calling a repository, and
//! reports missing rows as [`CoreError::NotFound`](projex_core::error::CoreError).

pub mod comment_service;
pub mod project_service;

pub use comment_service::CommentService;
pub use project_service::ProjectService;
