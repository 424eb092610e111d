//! Handlers for admin sign-in, sign-up and sign-out.
//!
//! These endpoints speak HTML forms rather than JSON: the login page posts
//! back to itself and failures re-render it with an inline error banner.

use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use unbenched_db::models::session::CreateSession;
use unbenched_db::models::user::{CreateUser, User};
use unbenched_db::repositories::{SessionRepo, UserRepo};
use validator::Validate;

use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::auth::session::{hash_session_id, issue_session, validate_session_token, SESSION_COOKIE};
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::session::{resolve_session, LOGIN_PATH};
use crate::state::AppState;

/// Where a successful sign-in lands.
const DASHBOARD_PATH: &str = "/admin";

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignupForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /admin/login
///
/// Already signed-in users go straight to the dashboard.
pub async fn login_page(State(state): State<AppState>, jar: CookieJar) -> AppResult<Response> {
    if resolve_session(&state, &jar).await?.is_some() {
        return Ok(Redirect::to(DASHBOARD_PATH).into_response());
    }
    Ok(render_login(StatusCode::OK, None, "", state.config.allow_signup))
}

/// POST /admin/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let email = normalize_email(&form.email);

    let Some(user) = UserRepo::find_by_email(&state.pool, &email).await? else {
        tracing::info!(email = %email, "Login failed: unknown email");
        return Ok(login_failure(&state, INVALID_CREDENTIALS, &email));
    };

    if !user.is_active {
        tracing::info!(user_id = user.id, "Login refused: account deactivated");
        return Ok(render_login(
            StatusCode::FORBIDDEN,
            Some("This account has been deactivated"),
            &email,
            state.config.allow_signup,
        ));
    }

    let valid = verify_password(&form.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        tracing::info!(user_id = user.id, "Login failed: wrong password");
        return Ok(login_failure(&state, INVALID_CREDENTIALS, &email));
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;
    let jar = start_session(&state, jar, &user, &headers).await?;

    tracing::info!(user_id = user.id, "Admin signed in");
    Ok((jar, Redirect::to(DASHBOARD_PATH)).into_response())
}

/// POST /admin/signup
///
/// Creates a staff account when sign-up is enabled, then signs it in.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Form(form): Form<SignupForm>,
) -> AppResult<Response> {
    let allow_signup = state.config.allow_signup;
    let email = normalize_email(&form.email);

    if !allow_signup {
        return Ok(render_login(
            StatusCode::FORBIDDEN,
            Some("Sign-up is disabled"),
            &email,
            allow_signup,
        ));
    }

    let form = SignupForm { email, ..form };
    if let Err(errors) = form.validate() {
        tracing::debug!(%errors, "Sign-up form rejected");
        return Ok(render_login(
            StatusCode::BAD_REQUEST,
            Some("Enter a valid email address"),
            &form.email,
            allow_signup,
        ));
    }
    if let Err(msg) = validate_password_strength(&form.password, MIN_PASSWORD_LENGTH) {
        return Ok(render_login(
            StatusCode::BAD_REQUEST,
            Some(&msg),
            &form.email,
            allow_signup,
        ));
    }

    if UserRepo::find_by_email(&state.pool, &form.email).await?.is_some() {
        return Ok(duplicate_account(&form.email, allow_signup));
    }

    let password_hash = hash_password(&form.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let created = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: form.email.clone(),
            password_hash,
        },
    )
    .await;
    let user = match created {
        Ok(user) => user,
        // A concurrent sign-up took the email after the check above.
        Err(e) if is_unique_violation(&e) => {
            tracing::info!(email = %form.email, "Sign-up lost race on duplicate email");
            return Ok(duplicate_account(&form.email, allow_signup));
        }
        Err(e) => return Err(e.into()),
    };

    UserRepo::record_successful_login(&state.pool, user.id).await?;
    let jar = start_session(&state, jar, &user, &headers).await?;

    tracing::info!(user_id = user.id, "Admin account created");
    Ok((jar, Redirect::to(DASHBOARD_PATH)).into_response())
}

/// POST /admin/logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> AppResult<Response> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Ok(claims) = validate_session_token(cookie.value(), &state.config.session) {
            SessionRepo::revoke_by_token_hash(&state.pool, &hash_session_id(&claims.jti)).await?;
            tracing::info!(user_id = claims.sub, "Admin signed out");
        }
    }

    let mut removal = Cookie::from(SESSION_COOKIE);
    removal.set_path("/");
    Ok((jar.remove(removal), Redirect::to(LOGIN_PATH)).into_response())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Persist a session row and attach its cookie to `jar`.
async fn start_session(
    state: &AppState,
    jar: CookieJar,
    user: &User,
    headers: &HeaderMap,
) -> AppResult<CookieJar> {
    let issued = issue_session(user.id, &user.email, &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Session signing error: {e}")))?;

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            token_hash: issued.token_hash,
            expires_at: issued.expires_at,
            user_agent,
        },
    )
    .await?;

    let cookie = Cookie::build((SESSION_COOKIE, issued.token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.session.cookie_secure);

    Ok(jar.add(cookie))
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn duplicate_account(email: &str, allow_signup: bool) -> Response {
    render_login(
        StatusCode::CONFLICT,
        Some("An account with this email already exists"),
        email,
        allow_signup,
    )
}

fn login_failure(state: &AppState, message: &str, email: &str) -> Response {
    render_login(
        StatusCode::UNAUTHORIZED,
        Some(message),
        email,
        state.config.allow_signup,
    )
}

/// Render the sign-in page with an optional error banner.
fn render_login(status: StatusCode, error: Option<&str>, email: &str, allow_signup: bool) -> Response {
    let banner = error
        .map(|msg| format!(r#"<p class="error" role="alert">{}</p>"#, escape_html(msg)))
        .unwrap_or_default();
    let email = escape_html(email);

    let signup = if allow_signup {
        r#"<button type="submit" formaction="/admin/signup">Create account</button>"#
    } else {
        ""
    };

    let page = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Unbenched Admin | Sign in</title>
</head>
<body>
<main>
<h1>Admin sign in</h1>
{banner}
<form method="post" action="/admin/login">
<label>Email <input type="email" name="email" value="{email}" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Sign in</button>
{signup}
</form>
</main>
</body>
</html>
"#
    );

    (status, Html(page)).into_response()
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn emails_are_normalized() {
        assert_eq!(normalize_email("  Coach@Example.EDU "), "coach@example.edu");
    }
}
