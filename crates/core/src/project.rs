//! Project attribute rules.
//!
//! A project is persist-able only when both `title` and `description` are
//! non-blank. Updates are expressed as a [`ProjectPatch`] merged onto the
//! stored attributes; the merged result is validated as a whole.

use serde::Serialize;

use crate::types::Date;
use crate::validation::{require_present, ValidationErrors};

/// Entity name used in not-found errors and log fields.
pub const ENTITY: &str = "Project";

/// The writable attributes of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectAttributes {
    pub title: String,
    pub description: String,
    pub rating: Option<i32>,
    pub date: Option<Date>,
}

/// Partial update. `None` leaves the stored value untouched.
///
/// `rating` and `date` are nullable columns, so `Some(None)` clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub rating: Option<Option<i32>>,
    pub date: Option<Option<Date>>,
}

impl ProjectAttributes {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_project(Some(&self.title), Some(&self.description))
    }

    /// Return a copy with every field present in `patch` applied.
    pub fn merged(&self, patch: &ProjectPatch) -> ProjectAttributes {
        ProjectAttributes {
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            description: patch
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            rating: patch.rating.unwrap_or(self.rating),
            date: patch.date.unwrap_or(self.date),
        }
    }
}

/// Check the required project fields, reporting every blank one.
pub fn validate_project(
    title: Option<&str>,
    description: Option<&str>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require_present(&mut errors, "title", title);
    require_present(&mut errors, "description", description);
    errors.into_result()
}
