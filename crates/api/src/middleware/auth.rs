//! Identity resolution and the login gate.
//!
//! [`resolve_principal`] runs on every request and records who is signed in.
//! [`require_login`] is layered onto the mutating routes only; it answers
//! with a redirect to [`LOGIN_PATH`] before the handler runs when nobody is.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use projex_core::error::CoreError;
use projex_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::response::redirect_to;
use crate::state::AppState;

/// Login entry point served by the identity service.
pub const LOGIN_PATH: &str = "/users/sign_in";

/// Cookie the identity service stores the access token in.
pub const AUTH_COOKIE: &str = "auth_token";

/// The authenticated principal for the current request.
///
/// Present in request extensions only when a valid access token was sent.
/// Handlers behind [`require_login`] can take it as an extractor:
///
/// ```ignore
/// async fn create(user: CurrentUser) -> AppResult<Response> {
///     tracing::info!(user_id = user.user_id, "creating");
///     ...
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: DbId,
}

impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentUser>().copied().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Sign in required".into()))
        })
    }
}

/// Decode the access token from the `Authorization: Bearer` header or the
/// auth cookie and attach the resulting [`CurrentUser`].
///
/// Missing, malformed, or expired tokens leave the request anonymous.
pub async fn resolve_principal(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let token = bearer_token(request.headers())
        .or_else(|| jar.get(AUTH_COOKIE).map(|c| c.value().to_string()));

    if let Some(token) = token {
        match validate_token(&token, &state.config.jwt) {
            Ok(claims) => {
                request
                    .extensions_mut()
                    .insert(CurrentUser { user_id: claims.sub });
            }
            Err(e) => tracing::debug!(error = %e, "Ignoring invalid access token"),
        }
    }

    next.run(request).await
}

/// Gate for mutating actions: anonymous requests are redirected to the
/// login page and never reach the handler.
pub async fn require_login(request: Request, next: Next) -> Response {
    if request.extensions().get::<CurrentUser>().is_none() {
        tracing::debug!(
            method = %request.method(),
            path = %request.uri().path(),
            "Anonymous request redirected to login"
        );
        return redirect_to(LOGIN_PATH);
    }
    next.run(request).await
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}
