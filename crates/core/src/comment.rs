//! Comment attribute rules.

use crate::validation::{require_present, ValidationErrors};

/// Entity name used in not-found errors and log fields.
pub const ENTITY: &str = "Comment";

/// Comment content must be non-blank.
pub fn validate_comment(content: Option<&str>) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    require_present(&mut errors, "content", content);
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_required() {
        assert!(validate_comment(Some("Test comment")).is_ok());

        for content in [None, Some(""), Some("   ")] {
            let errors = validate_comment(content).unwrap_err();
            assert_eq!(errors.full_messages(), vec!["Content can't be blank"]);
        }
    }
}
