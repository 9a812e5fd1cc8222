//! Form parameters accepted by the project and comment actions.
//!
//! Forms are submitted as `application/x-www-form-urlencoded`. Every field
//! arrives as an optional raw string: absent means "not submitted", present
//! but blank means "submitted empty". The conversions below turn them into
//! the db DTOs and reject unparsable numbers and dates with a 400.

use chrono::NaiveDate;
use projex_core::types::{Date, DbId};
use projex_db::models::comment::CreateComment;
use projex_db::models::project::{CreateProject, UpdateProject};
use serde::Deserialize;

use crate::error::AppError;

/// Accepted format for the `date` field (HTML date input).
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fields of the project form.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub rating: Option<String>,
    pub date: Option<String>,
}

impl ProjectParams {
    /// Build an insert DTO. Missing text fields become empty strings so the
    /// validators report them as blank.
    pub fn into_create(self) -> Result<CreateProject, AppError> {
        Ok(CreateProject {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            rating: parse_rating(self.rating.as_deref())?,
            date: parse_date(self.date.as_deref())?,
        })
    }

    /// Build a partial update. Only submitted fields are applied; a blank
    /// `rating` or `date` clears the stored value.
    pub fn into_patch(self) -> Result<UpdateProject, AppError> {
        let rating = match self.rating.as_deref() {
            Some(raw) => Some(parse_rating(Some(raw))?),
            None => None,
        };
        let date = match self.date.as_deref() {
            Some(raw) => Some(parse_date(Some(raw))?),
            None => None,
        };

        Ok(UpdateProject {
            title: self.title,
            description: self.description,
            rating,
            date,
        })
    }
}

/// Fields of the comment form.
///
/// `project_id` is only read by the flat `/comments` route; the nested route
/// takes the project from the path.
#[derive(Debug, Default, Deserialize)]
pub struct CommentParams {
    pub content: Option<String>,
    pub project_id: Option<String>,
}

impl CommentParams {
    pub fn to_create(&self) -> CreateComment {
        CreateComment {
            content: self.content.clone().unwrap_or_default(),
        }
    }

    /// The owning project named in the form body.
    pub fn project_id(&self) -> Result<DbId, AppError> {
        let raw = self
            .project_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::BadRequest("project_id is required".into()))?;
        raw.parse()
            .map_err(|_| AppError::BadRequest(format!("Invalid project_id '{raw}'")))
    }
}

fn parse_rating(raw: Option<&str>) -> Result<Option<i32>, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Invalid rating '{s}'"))),
    }
}

fn parse_date(raw: Option<&str>) -> Result<Option<Date>, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Invalid date '{s}', expected YYYY-MM-DD"))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ProjectParams {
        let mut p = ProjectParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "title" => p.title = value,
                "description" => p.description = value,
                "rating" => p.rating = value,
                "date" => p.date = value,
                other => panic!("unexpected key {other}"),
            }
        }
        p
    }

    #[test]
    fn create_defaults_missing_text_to_empty() {
        let create = ProjectParams::default().into_create().unwrap();
        assert_eq!(create.title, "");
        assert_eq!(create.description, "");
        assert_eq!(create.rating, None);
        assert!(create.validate().is_err());
    }

    #[test]
    fn create_parses_rating_and_date() {
        let create = params(&[
            ("title", "T"),
            ("description", "D"),
            ("rating", " 4 "),
            ("date", "2023-03-31"),
        ])
        .into_create()
        .unwrap();
        assert_eq!(create.rating, Some(4));
        assert_eq!(create.date, NaiveDate::from_ymd_opt(2023, 3, 31));
    }

    #[test]
    fn blank_rating_and_date_are_none() {
        let create = params(&[("rating", ""), ("date", "  ")]).into_create().unwrap();
        assert_eq!(create.rating, None);
        assert_eq!(create.date, None);
    }

    #[test]
    fn bad_rating_is_bad_request() {
        assert_matches!(
            params(&[("rating", "five")]).into_create(),
            Err(AppError::BadRequest(msg)) if msg.contains("rating")
        );
        assert_matches!(
            params(&[("date", "31/03/2023")]).into_patch(),
            Err(AppError::BadRequest(_))
        );
    }

    #[test]
    fn patch_distinguishes_absent_from_blank() {
        let patch = params(&[("description", ""), ("rating", "")]).into_patch().unwrap();
        assert_eq!(patch.title, None);
        assert_eq!(patch.description, Some(String::new()));
        assert_eq!(patch.rating, Some(None));
        assert_eq!(patch.date, None);
    }

    #[test]
    fn comment_project_id_is_required_for_flat_route() {
        let mut p = CommentParams::default();
        assert_matches!(p.project_id(), Err(AppError::BadRequest(_)));

        p.project_id = Some("abc".into());
        assert_matches!(p.project_id(), Err(AppError::BadRequest(_)));

        p.project_id = Some("12".into());
        assert_eq!(p.project_id().unwrap(), 12);
    }

    #[test]
    fn form_body_deserializes() {
        let p: ProjectParams =
            serde_urlencoded_like("title=New+project+title&description=&rating=3");
        assert_eq!(p.title.as_deref(), Some("New project title"));
        assert_eq!(p.description.as_deref(), Some(""));
        assert_eq!(p.rating.as_deref(), Some("3"));
        assert_eq!(p.date, None);
    }

    /// Decode a body the same way `axum::Form` does.
    fn serde_urlencoded_like<T: serde::de::DeserializeOwned>(body: &str) -> T {
        use axum::extract::FromRequest;
        use axum::Form;

        let request = axum::http::Request::builder()
            .method("POST")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(axum::body::Body::from(body.to_string()))
            .unwrap();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let Form(value) = runtime
            .block_on(Form::<T>::from_request(request, &()))
            .expect("form should decode");
        value
    }
}
