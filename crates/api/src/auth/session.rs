//! Signed admin session tokens.
//!
//! A login produces an HS256 JWT carried in the [`SESSION_COOKIE`] cookie.
//! Its `jti` is a random session id; the server stores only the SHA-256 of
//! that id in `user_sessions`, so a session can be revoked before the token
//! itself expires.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use unbenched_core::types::{DbId, Timestamp};
use uuid::Uuid;

/// Name of the cookie holding the session token.
pub const SESSION_COOKIE: &str = "unbenched_session";

/// Default session lifetime in hours.
const DEFAULT_SESSION_EXPIRY_HOURS: i64 = 24 * 7;

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    pub email: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Session id; its hash is the `user_sessions.token_hash` key.
    pub jti: String,
}

/// Configuration for signing and delivering session cookies.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    pub expiry_hours: i64,
    /// Mark the cookie `Secure` (HTTPS only).
    pub cookie_secure: bool,
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                 | Required | Default |
    /// |-------------------------|----------|---------|
    /// | `SESSION_SECRET`        | **yes**  | --      |
    /// | `SESSION_EXPIRY_HOURS`  | no       | `168`   |
    /// | `SESSION_COOKIE_SECURE` | no       | `false` |
    ///
    /// # Panics
    ///
    /// Panics if `SESSION_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "SESSION_SECRET must not be empty");

        let expiry_hours: i64 = std::env::var("SESSION_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_SESSION_EXPIRY_HOURS.to_string())
            .parse()
            .expect("SESSION_EXPIRY_HOURS must be a valid i64");

        let cookie_secure = crate::config::parse_flag("SESSION_COOKIE_SECURE", false);

        Self {
            secret,
            expiry_hours,
            cookie_secure,
        }
    }
}

/// A freshly signed session, ready to be persisted and sent to the browser.
#[derive(Debug)]
pub struct IssuedSession {
    /// Cookie value.
    pub token: String,
    /// SHA-256 hex of the session id, stored server-side.
    pub token_hash: String,
    pub expires_at: Timestamp,
}

/// Sign a new session token for the given user.
pub fn issue_session(
    user_id: DbId,
    email: &str,
    config: &SessionConfig,
) -> Result<IssuedSession, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.expiry_hours);
    let session_id = Uuid::new_v4().to_string();

    let claims = SessionClaims {
        sub: user_id,
        email: email.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
        jti: session_id.clone(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(IssuedSession {
        token,
        token_hash: hash_session_id(&session_id),
        expires_at,
    })
}

/// Verify the signature and expiry of a session token.
pub fn validate_session_token(
    token: &str,
    config: &SessionConfig,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// SHA-256 hex digest of a session id.
pub fn hash_session_id(session_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(session_id.as_bytes());
    format!("{:x}", hasher.finalize())
}
