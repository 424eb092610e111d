//! Cookie-session gate for the `/admin` area.
//!
//! Every request whose path starts with `/admin`, except the login and
//! sign-up endpoints, must carry a live session cookie. This includes paths
//! no admin route matches. Anything else (no cookie, bad signature, revoked
//! or expired session, or a failure while checking) is redirected to
//! `/admin/login`.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use unbenched_core::error::CoreError;
use unbenched_core::types::DbId;
use unbenched_db::models::user::User;
use unbenched_db::repositories::{SessionRepo, UserRepo};

use crate::auth::session::{hash_session_id, validate_session_token, SESSION_COOKIE};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Prefix of every gated path.
pub const ADMIN_PREFIX: &str = "/admin";

pub const LOGIN_PATH: &str = "/admin/login";

/// Admin paths reachable without a session.
const PUBLIC_ADMIN_PATHS: &[&str] = &[LOGIN_PATH, "/admin/signup"];

/// Signed-in staff member, inserted into request extensions by
/// [`require_admin_session`].
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: DbId,
    pub email: String,
}

impl From<&User> for AdminUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<AdminUser>().cloned().ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Admin session required".into()))
        })
    }
}

/// Whether `path` is `/admin` or lies beneath it.
pub fn is_admin_path(path: &str) -> bool {
    path.strip_prefix(ADMIN_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Whether `path` may be served without a session.
pub fn is_public_admin_path(path: &str) -> bool {
    let path = path.strip_suffix('/').unwrap_or(path);
    PUBLIC_ADMIN_PATHS.contains(&path)
}

/// Resolve the session cookie to its user.
///
/// `Ok(None)` covers every "not signed in" case: missing cookie, invalid or
/// expired token, revoked session, deleted or deactivated user.
pub async fn resolve_session(state: &AppState, jar: &CookieJar) -> AppResult<Option<User>> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(None);
    };

    let claims = match validate_session_token(cookie.value(), &state.config.session) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected session token");
            return Ok(None);
        }
    };

    let token_hash = hash_session_id(&claims.jti);
    let Some(session) = SessionRepo::find_active_by_token_hash(&state.pool, &token_hash).await?
    else {
        return Ok(None);
    };

    if session.user_id != claims.sub {
        tracing::warn!(
            session_user = session.user_id,
            claimed_user = claims.sub,
            "Session user mismatch"
        );
        return Ok(None);
    }

    let user = UserRepo::find_by_id(&state.pool, session.user_id).await?;
    Ok(user.filter(|u| u.is_active))
}

/// Middleware installed on the top-level router. Requests outside
/// `/admin` pass through untouched.
pub async fn require_admin_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let uri = request.uri().clone();
    if !is_admin_path(uri.path()) || is_public_admin_path(uri.path()) {
        return next.run(request).await;
    }

    match resolve_session(&state, &jar).await {
        Ok(Some(user)) => {
            request.extensions_mut().insert(AdminUser::from(&user));
            next.run(request).await
        }
        Ok(None) => {
            tracing::debug!(path = %uri.path(), "No admin session, redirecting to login");
            redirect_to_login()
        }
        Err(e) => {
            tracing::error!(error = %e, path = %uri.path(), "Session check failed");
            redirect_to_login()
        }
    }
}

fn redirect_to_login() -> Response {
    Redirect::temporary(LOGIN_PATH).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_and_signup_are_public() {
        assert!(is_public_admin_path("/admin/login"));
        assert!(is_public_admin_path("/admin/login/"));
        assert!(is_public_admin_path("/admin/signup"));
    }

    #[test]
    fn admin_prefix_matching() {
        assert!(is_admin_path("/admin"));
        assert!(is_admin_path("/admin/"));
        assert!(is_admin_path("/admin/nope"));
        assert!(!is_admin_path("/administrator"));
        assert!(!is_admin_path("/api/sports"));
        assert!(!is_admin_path("/"));
    }

    #[test]
    fn everything_else_is_gated() {
        assert!(!is_public_admin_path("/admin"));
        assert!(!is_public_admin_path("/admin/sports"));
        assert!(!is_public_admin_path("/admin/logout"));
        assert!(!is_public_admin_path("/admin/login-help"));
    }
}
