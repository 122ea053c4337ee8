//! Home Bakery storefront library.
//!
//! A single-page bakery storefront: catalog with category filter, delivery
//! date picker, session cart and an order form. Exposed as a library so the
//! router can be driven from tests without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod content;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

use axum::{Router, middleware as axum_middleware};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::state::AppState;

/// Directory holding the stylesheet and images.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Build the storefront router with its full middleware stack.
///
/// Sentry layers are not included; `main` wraps the result in them.
#[must_use]
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .merge(routes::routes(state.config()))
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(session_layer)
        .layer(axum_middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum_middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use bakery_core::StaticCatalog;
    use tower::ServiceExt;

    use super::*;
    use crate::config::StorefrontConfig;

    fn test_app() -> Router {
        let catalog = StaticCatalog::from_json(include_str!("../content/catalog.json")).unwrap();
        app(AppState::new(StorefrontConfig::default(), catalog))
    }

    #[tokio::test]
    async fn test_health_through_full_stack() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert!(response.headers().contains_key("content-security-policy"));
    }

    #[tokio::test]
    async fn test_upstream_request_id_is_echoed() {
        let response = test_app()
            .oneshot(
                Request::get("/health")
                    .header("x-request-id", "edge-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers().get("x-request-id").unwrap(), "edge-42");
    }

    #[tokio::test]
    async fn test_form_post_without_client_address_is_refused() {
        // No proxy header and no connection info: the limiter cannot key it
        let response = test_app()
            .oneshot(
                Request::post("/cart/add")
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(Body::from("product_id=1"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(!response.status().is_success());
        assert!(!response.status().is_redirection());
    }

    #[tokio::test]
    async fn test_rotating_forwarded_for_does_not_escape_limiter() {
        let app = test_app();
        let peer: std::net::SocketAddr = "192.0.2.10:51000".parse().unwrap();

        let mut statuses = Vec::new();
        for n in 0..31 {
            let mut request = Request::post("/cart/add")
                .header("content-type", "application/x-www-form-urlencoded")
                .header("x-forwarded-for", format!("198.51.100.{n}"))
                .body(Body::from("product_id=1"))
                .unwrap();
            request
                .extensions_mut()
                .insert(axum::extract::ConnectInfo(peer));
            statuses.push(app.clone().oneshot(request).await.unwrap().status());
        }

        assert!(statuses.first().unwrap().is_redirection());
        assert_eq!(statuses.last().unwrap(), &StatusCode::TOO_MANY_REQUESTS);
    }
}
