//! One-shot flash notices carried across a redirect.
//!
//! A successful write stores a [`Notice`] key in the `flash_notice` cookie
//! and redirects; the next rendered view takes it out of the cookie jar and
//! shows its message exactly once.

use axum_extra::extract::cookie::{Cookie, CookieJar};

/// Cookie holding the pending notice key.
pub const FLASH_COOKIE: &str = "flash_notice";

/// Success messages shown after a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ProjectCreated,
    ProjectUpdated,
    ProjectDestroyed,
    CommentCreated,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::ProjectCreated => "Project was successfully created.",
            Notice::ProjectUpdated => "Project was successfully updated.",
            Notice::ProjectDestroyed => "Project was successfully destroyed.",
            Notice::CommentCreated => "Comment was successfully created.",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Notice::ProjectCreated => "project_created",
            Notice::ProjectUpdated => "project_updated",
            Notice::ProjectDestroyed => "project_destroyed",
            Notice::CommentCreated => "comment_created",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "project_created" => Some(Notice::ProjectCreated),
            "project_updated" => Some(Notice::ProjectUpdated),
            "project_destroyed" => Some(Notice::ProjectDestroyed),
            "comment_created" => Some(Notice::CommentCreated),
            _ => None,
        }
    }
}

/// Queue `notice` for the next rendered page.
pub fn set_notice(jar: CookieJar, notice: Notice) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE, notice.key()))
            .path("/")
            .http_only(true),
    )
}

/// Remove the pending notice, if any, returning the updated jar with it.
///
/// Unknown keys are dropped silently.
pub fn take_notice(jar: CookieJar) -> (CookieJar, Option<Notice>) {
    let Some(notice) = jar.get(FLASH_COOKIE).map(|c| Notice::from_key(c.value())) else {
        return (jar, None);
    };
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, notice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_take_round_trips_once() {
        let jar = set_notice(CookieJar::new(), Notice::ProjectCreated);
        assert_eq!(jar.get(FLASH_COOKIE).map(|c| c.value()), Some("project_created"));

        let (jar, notice) = take_notice(jar);
        assert_eq!(notice, Some(Notice::ProjectCreated));
        assert!(jar.get(FLASH_COOKIE).is_none());

        let (_, again) = take_notice(jar);
        assert_eq!(again, None);
    }

    #[test]
    fn unknown_key_is_discarded() {
        let jar = CookieJar::new().add(Cookie::new(FLASH_COOKIE, "bogus"));
        let (jar, notice) = take_notice(jar);
        assert_eq!(notice, None);
        assert!(jar.get(FLASH_COOKIE).is_none());
    }

    #[test]
    fn messages_match_controller_wording() {
        assert_eq!(
            Notice::ProjectCreated.message(),
            "Project was successfully created."
        );
        assert_eq!(
            Notice::CommentCreated.message(),
            "Comment was successfully created."
        );
    }
}
