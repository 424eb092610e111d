use std::path::PathBuf;

use crate::auth::session::SessionConfig;

/// Default cap on a single request body (uploads included): 10 MiB.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields except the session secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long to wait for background tasks after shutdown (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Largest accepted request body in bytes.
    pub max_upload_bytes: usize,
    /// Whether `POST /admin/signup` may create new staff accounts.
    pub allow_signup: bool,
    /// Admin session cookie settings.
    pub session: SessionConfig,
    /// Object storage location.
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                    |
    /// | `MAX_UPLOAD_BYTES`      | `10485760`              |
    /// | `ALLOW_SIGNUP`          | `false`                 |
    ///
    /// See [`SessionConfig::from_env`] and [`StorageConfig::from_env`] for
    /// the nested settings.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let allow_signup = parse_flag("ALLOW_SIGNUP", false);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            max_upload_bytes,
            allow_signup,
            session: SessionConfig::from_env(),
            storage: StorageConfig::from_env(),
        }
    }
}

/// Where uploaded objects live on disk and how they are addressed publicly.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Directory holding one subdirectory per bucket.
    pub root: PathBuf,
    /// Origin used when building public object URLs.
    pub public_base_url: String,
}

impl StorageConfig {
    /// | Env Var           | Default                 |
    /// |-------------------|-------------------------|
    /// | `STORAGE_ROOT`    | `storage`               |
    /// | `PUBLIC_BASE_URL` | `http://localhost:3000` |
    pub fn from_env() -> Self {
        let root = std::env::var("STORAGE_ROOT").unwrap_or_else(|_| "storage".into());
        let public_base_url =
            std::env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());

        Self {
            root: PathBuf::from(root),
            public_base_url,
        }
    }
}

/// Read a boolean env var (`true/false/1/0/yes/no`), falling back to `default`.
///
/// # Panics
///
/// Panics on any other value so typos fail at startup.
pub(crate) fn parse_flag(var: &str, default: bool) -> bool {
    match std::env::var(var) {
        Err(_) => default,
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" | "" => false,
            other => panic!("{var} must be a boolean, got '{other}'"),
        },
    }
}
