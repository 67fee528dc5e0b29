//! Integration tests for the Sakura Keramika storefront.
//!
//! The tests drive the complete router in process with `tower::ServiceExt`,
//! so no server or port is needed. [`TestContext`] carries the session
//! cookie between requests, which keeps one logical browser session alive
//! across a test scenario.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sakura-integration-tests
//! ```

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use tower::ServiceExt;

use sakura_storefront::config::StorefrontConfig;
use sakura_storefront::{AppState, app};

/// Maximum response body size tests will read.
const MAX_BODY_BYTES: usize = 1 << 20;

/// An in-process storefront with one browser session.
pub struct TestContext {
    app: Router,
    cookie: Option<String>,
}

impl TestContext {
    /// Build a fresh storefront with its own in-memory session store.
    ///
    /// # Panics
    ///
    /// Panics if the application state cannot be built; in tests that is a
    /// broken fixture, not a condition to handle.
    #[must_use]
    pub fn new() -> Self {
        let content_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../storefront/content");
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().expect("valid host"),
            port: 3000,
            base_url: "http://127.0.0.1:3000".to_string(),
            content_dir: content_dir.clone(),
        };

        let state = AppState::new(config, &content_dir).expect("Failed to build app state");

        Self {
            app: app(state),
            cookie: None,
        }
    }

    /// Send a GET request, returning status and body text.
    pub async fn get(&mut self, uri: &str) -> (StatusCode, String) {
        let request = self
            .request_builder("GET", uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// Send a POST request with a urlencoded form body.
    pub async fn post_form(&mut self, uri: &str, body: &str) -> (StatusCode, String) {
        let request = self
            .request_builder("POST", uri)
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from(body.to_string()))
            .expect("valid request");
        self.send(request).await
    }

    /// Send a prebuilt request and return the raw response.
    ///
    /// Useful when a test needs to inspect headers rather than the body.
    pub async fn raw(&mut self, request: Request<Body>) -> Response<Body> {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        self.remember_cookie(&response);
        response
    }

    fn request_builder(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie.clone());
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.raw(request).await;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), MAX_BODY_BYTES)
            .await
            .expect("readable body");
        let body = String::from_utf8(bytes.to_vec()).expect("utf-8 body");
        (status, body)
    }

    /// Keep the session cookie the storefront set, if any.
    fn remember_cookie(&mut self, response: &Response<Body>) {
        if let Some(value) = response.headers().get(header::SET_COOKIE)
            && let Ok(raw) = value.to_str()
            && let Some(pair) = raw.split(';').next()
        {
            self.cookie = Some(pair.to_string());
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
