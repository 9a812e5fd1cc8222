//! Field-level validation primitives.
//!
//! Validators are plain functions that collect [`FieldError`]s into a
//! [`ValidationErrors`] list. Every write path runs them before touching the
//! database, and the api layer renders the collected messages inline on the
//! form that produced them.

use std::fmt;

use serde::Serialize;

/// Message attached to a required field that is missing or blank.
pub const BLANK_MESSAGE: &str = "can't be blank";

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Attribute name as submitted (e.g. `"title"`).
    pub field: &'static str,
    /// Message without the attribute prefix (e.g. `"can't be blank"`).
    pub message: String,
}

impl FieldError {
    pub fn blank(field: &'static str) -> Self {
        Self {
            field,
            message: BLANK_MESSAGE.to_string(),
        }
    }

    /// Human-readable sentence: `"Title can't be blank"`.
    pub fn full_message(&self) -> String {
        format!("{} {}", humanize(self.field), self.message)
    }
}

/// Ordered list of field errors produced by one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Whether any error was recorded against `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.0.iter().map(FieldError::full_message).collect()
    }

    /// `Ok(())` when nothing was recorded, otherwise the list itself.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_messages().join(", "))
    }
}

/// A string is blank when it is empty or consists only of whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Record a blank error for `field` when `value` is missing or blank.
pub fn require_present(errors: &mut ValidationErrors, field: &'static str, value: Option<&str>) {
    match value {
        Some(v) if !is_blank(v) => {}
        _ => errors.push(FieldError::blank(field)),
    }
}

/// `"project_id"` -> `"Project id"`.
fn humanize(field: &str) -> String {
    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("x"));
        assert!(!is_blank("  x  "));
    }

    #[test]
    fn require_present_treats_missing_as_blank() {
        let mut errors = ValidationErrors::new();
        require_present(&mut errors, "title", None);
        require_present(&mut errors, "description", Some(" "));
        require_present(&mut errors, "content", Some("ok"));

        assert_eq!(errors.len(), 2);
        assert!(errors.has_field("title"));
        assert!(errors.has_field("description"));
        assert!(!errors.has_field("content"));
    }

    #[test]
    fn full_message_is_humanized() {
        assert_eq!(FieldError::blank("title").full_message(), "Title can't be blank");
        assert_eq!(
            FieldError::blank("project_id").full_message(),
            "Project id can't be blank"
        );
    }

    #[test]
    fn display_joins_messages() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::blank("title"));
        errors.push(FieldError::blank("description"));
        assert_eq!(
            errors.to_string(),
            "Title can't be blank, Description can't be blank"
        );
    }

    #[test]
    fn empty_list_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}
