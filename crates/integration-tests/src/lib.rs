//! Integration test harness for the Home Bakery storefront.
//!
//! Drives the full storefront router (sessions, rate limiting, security
//! headers) in-process, carrying the session cookie between requests the way
//! a browser would.
//!
//! ```rust,ignore
//! let mut app = TestApp::new();
//! let resp = app.post_form("/cart/add", &[("product_id", "2")]).await;
//! assert_eq!(resp.status, StatusCode::SEE_OTHER);
//! assert!(app.get("/cart").await.body.contains("120 ₽"));
//! ```

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{HeaderMap, Request, StatusCode, header};
use bakery_core::StaticCatalog;
use bakery_storefront::config::StorefrontConfig;
use bakery_storefront::content::{CATALOG_FILE, load_catalog};
use bakery_storefront::state::AppState;
use tower::ServiceExt;

/// TCP peer address the rate limiter sees for test requests.
const TEST_CLIENT_ADDR: ([u8; 4], u16) = ([203, 0, 113, 7], 50_000);

/// Load the catalog shipped with the storefront.
///
/// # Panics
///
/// Panics if the bundled catalog is missing or invalid.
#[must_use]
pub fn bundled_catalog() -> StaticCatalog {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../storefront/content")
        .join(CATALOG_FILE);
    load_catalog(&path).expect("bundled catalog loads")
}

/// A response with its body collected as text.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Redirect target, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

/// One visitor talking to an in-process storefront.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Storefront over the bundled catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(bundled_catalog())
    }

    /// Storefront over `catalog`.
    #[must_use]
    pub fn with_catalog(catalog: StaticCatalog) -> Self {
        let state = AppState::new(StorefrontConfig::default(), catalog);
        Self {
            router: bakery_storefront::app(state),
            cookie: None,
        }
    }

    /// Another visitor on the same server, with no session yet.
    #[must_use]
    pub fn new_visitor(&self) -> Self {
        Self {
            router: self.router.clone(),
            cookie: None,
        }
    }

    /// Send a GET request.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self
            .request("GET", uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// Send a urlencoded form POST.
    ///
    /// # Panics
    ///
    /// Panics if the request cannot be built or the body cannot be read.
    pub async fn post_form(&mut self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        let request = self
            .request("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("valid request");
        self.send(request).await
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .extension(ConnectInfo(SocketAddr::from(TEST_CLIENT_ADDR)));
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder
    }

    async fn send(&mut self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
        {
            self.cookie = Some(cookie.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body is readable");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
