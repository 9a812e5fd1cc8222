//! Login entry point.

use crate::response::View;

/// GET /users/sign_in
///
/// Target of the login-gate redirect. The sign-in form posts to the
/// identity service, which sets the `auth_token` cookie.
pub async fn sign_in() -> View<()> {
    View::render("users/sessions/new", ())
}
