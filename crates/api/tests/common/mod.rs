#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;
use unbenched_api::auth::password::hash_password;
use unbenched_api::auth::session::{SessionConfig, SESSION_COOKIE};
use unbenched_api::config::{ServerConfig, StorageConfig};
use unbenched_api::router::build_app_router;
use unbenched_api::state::AppState;
use unbenched_core::storage::LocalStorage;
use unbenched_db::models::user::CreateUser;
use unbenched_db::repositories::UserRepo;

pub const ADMIN_EMAIL: &str = "sid@unbenched.test";
pub const ADMIN_PASSWORD: &str = "sideline-pass";
pub const TEST_UPLOAD_LIMIT: usize = 1024 * 1024;

const BOUNDARY: &str = "unbenched-test-boundary";

/// Test `ServerConfig` with storage rooted at `storage_root`.
pub fn test_config(storage_root: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 5,
        max_upload_bytes: TEST_UPLOAD_LIMIT,
        allow_signup: true,
        session: SessionConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_hours: 1,
            cookie_secure: false,
        },
        storage: StorageConfig {
            root: storage_root.to_path_buf(),
            public_base_url: "http://localhost:3000".to_string(),
        },
    }
}

/// A router plus the temporary storage directory it writes to.
pub struct TestApp {
    pub router: Router,
    pub storage: TempDir,
}

impl TestApp {
    /// Fresh clone of the router for a single `oneshot` call.
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

/// Build the production router against `pool` with default test settings.
pub fn build_test_app(pool: PgPool) -> TestApp {
    build_test_app_with(pool, |_| {})
}

/// Like [`build_test_app`], letting the caller tweak the config first.
pub fn build_test_app_with(pool: PgPool, tweak: impl FnOnce(&mut ServerConfig)) -> TestApp {
    let storage_dir = tempfile::tempdir().expect("temp dir should be created");
    let mut config = test_config(storage_dir.path());
    tweak(&mut config);

    let storage = LocalStorage::new(storage_dir.path(), &config.storage.public_base_url);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: Arc::new(storage),
    };

    TestApp {
        router: build_app_router(state, &config),
        storage: storage_dir,
    }
}

/// Insert a staff account directly and return its id.
pub async fn create_admin(pool: &PgPool) -> i64 {
    let password_hash = hash_password(ADMIN_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            email: ADMIN_EMAIL.to_string(),
            password_hash,
        },
    )
    .await
    .expect("user creation should succeed")
    .id
}

/// Create an admin account, sign in through the login form, and return the
/// `Cookie` header value for later requests.
pub async fn login_cookie(pool: &PgPool, app: Router) -> String {
    create_admin(pool).await;
    let response = post_form(
        app,
        "/admin/login",
        &format!("email={ADMIN_EMAIL}&password={ADMIN_PASSWORD}"),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    session_cookie(&response).expect("login should set the session cookie")
}

/// `name=value` of the session cookie set by `response`, if any.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{SESSION_COOKIE}=")))
        .map(str::to_string)
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response.headers().get(LOCATION).and_then(|v| v.to_str().ok())
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

fn with_cookie(builder: axum::http::request::Builder, cookie: Option<&str>) -> axum::http::request::Builder {
    match cookie {
        Some(cookie) => builder.header(COOKIE, cookie),
        None => builder,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    get_with_cookie(app, uri, None).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let request = with_cookie(Request::builder().method(Method::GET).uri(uri), cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body, None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, body, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    delete_with_cookie(app, uri, None).await
}

pub async fn delete_with_cookie(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let request = with_cookie(Request::builder().method(Method::DELETE).uri(uri), cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Response<Body> {
    let request = with_cookie(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json"),
        cookie,
    )
    .body(Body::from(body.to_string()))
    .unwrap();
    send(app, request).await
}

pub async fn post_form(app: Router, uri: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
    let request = with_cookie(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded"),
        cookie,
    )
    .body(Body::from(body.to_string()))
    .unwrap();
    send(app, request).await
}

/// One part of a hand-built multipart body.
pub enum Part<'a> {
    File {
        name: &'a str,
        filename: &'a str,
        content_type: &'a str,
        bytes: &'a [u8],
    },
    Text {
        name: &'a str,
        value: &'a str,
    },
}

pub async fn post_multipart(app: Router, uri: &str, parts: &[Part<'_>], cookie: Option<&str>) -> Response<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::File {
                name,
                filename,
                content_type,
                bytes,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}").as_bytes(),
                );
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let request = with_cookie(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}")),
        cookie,
    )
    .body(Body::from(body))
    .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).expect("body should be UTF-8")
}

/// A small PNG of the given size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([0, 51, 102, 255]));
    let mut buf = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .expect("png encoding should succeed");
    buf.into_inner()
}
