//! Session cookie handling

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use domain::SessionId;

use crate::state::AppState;

/// Name of the cookie carrying the session id
pub const SESSION_COOKIE: &str = "onvaou_session";

/// Session id named by the request cookie, if well formed
pub fn requested(jar: &CookieJar) -> Option<SessionId> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| SessionId::parse(cookie.value()).ok())
}

/// Resolve the session of a state-changing request and make sure the cookie
/// carries it
///
/// A missing, malformed or expired cookie starts a new session.
pub fn resolve(state: &AppState, jar: CookieJar) -> (SessionId, CookieJar) {
    let requested = requested(&jar);
    let id = state.sessions.get_or_create(requested);

    if requested == Some(id) {
        return (id, jar);
    }

    let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (id, jar.add(cookie))
}
