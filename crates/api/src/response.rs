//! Response shapes for the form-driven actions.
//!
//! Pages are returned as JSON view documents: the template name, the data
//! it renders, any pending flash notice, and inline error messages. A
//! successful write answers with a `302 Found` redirect instead.

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use projex_core::validation::ValidationErrors;
use serde::Serialize;

use crate::flash::Notice;

/// A rendered page.
#[derive(Debug, Serialize)]
pub struct View<T: Serialize> {
    /// Template path, e.g. `"projects/show"`.
    pub template: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
    /// Full error sentences (`"Title can't be blank"`), empty on a clean render.
    pub errors: Vec<String>,
    pub data: T,
    #[serde(skip)]
    status: StatusCode,
}

impl<T: Serialize> View<T> {
    /// A normal `200 OK` render.
    pub fn render(template: &'static str, data: T) -> Self {
        Self {
            template,
            notice: None,
            errors: Vec::new(),
            data,
            status: StatusCode::OK,
        }
    }

    /// Re-render a form after a rejected write (`422 Unprocessable Entity`).
    pub fn invalid(template: &'static str, data: T, errors: &ValidationErrors) -> Self {
        Self {
            template,
            notice: None,
            errors: errors.full_messages(),
            data,
            status: StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn with_notice(mut self, notice: Option<Notice>) -> Self {
        self.notice = notice.map(Notice::message);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for View<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// `302 Found` redirect to `location`.
pub fn redirect_to(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}
