//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (?category=<label> filters the catalog)
//! POST /order-date             - Select or clear the delivery date
//!
//! # Cart
//! GET  /cart                   - Cart contents, total and order form
//! GET  /cart/count             - Cart count badge (fragment)
//! POST /cart/add               - Add one unit of a product, redirect back
//! POST /cart/order             - Save the order form, redirect to /cart
//!
//! # Health
//! GET  /health                 - Liveness
//! GET  /health/ready           - Readiness (catalog loaded)
//! ```
//!
//! Every POST is a plain HTML form followed by a redirect, so the page works
//! without JavaScript.

pub mod cart;
pub mod home;
pub mod order;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use bakery_core::CatalogProvider;

use crate::config::StorefrontConfig;
use crate::middleware::form_rate_limiter;
use crate::models::VisitorSession;
use crate::state::AppState;

/// Shared page chrome: stylesheet version and the header cart badge.
#[derive(Clone, Debug)]
pub struct Layout {
    pub css_hash: &'static str,
    pub cart_count: u64,
}

impl Layout {
    /// Build the layout for the current visitor.
    ///
    /// # Errors
    ///
    /// Returns an error if the visitor session cannot be read.
    pub async fn for_visitor(session: &VisitorSession) -> crate::error::Result<Self> {
        let cart = session.cart().await?;
        Ok(Self {
            css_hash: env!("CSS_HASH"),
            cart_count: cart.total_item_count(),
        })
    }
}

/// Resolve a client-supplied redirect target to a same-site path.
///
/// Only absolute paths on this origin are accepted; anything else
/// (`https://…`, `//evil.example`, `/\evil`) falls back to `default`.
#[must_use]
pub fn safe_return_path(candidate: Option<&str>, default: &str) -> String {
    candidate
        .map(str::trim)
        .filter(|path| {
            path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control)
        })
        .unwrap_or(default)
        .to_string()
}

/// Create the cart routes router.
pub fn cart_routes(trust_proxy: bool) -> Router<AppState> {
    let forms = Router::new()
        .route("/add", post(cart::add))
        .route("/order", post(order::save_draft))
        .route_layer(form_rate_limiter(trust_proxy));

    Router::new()
        .route("/", get(cart::show))
        .route("/count", get(cart::count))
        .merge(forms)
}

/// Create all routes for the storefront.
///
/// `config.trust_proxy` decides whether the form rate limiter reads client
/// IPs from proxy headers.
pub fn routes(config: &StorefrontConfig) -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route(
            "/order-date",
            post(order::set_date).route_layer(form_rate_limiter(config.trust_proxy)),
        )
        .nest("/cart", cart_routes(config.trust_proxy))
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the catalog has no products.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.catalog().products().is_empty() {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_return_path_accepts_local_paths() {
        assert_eq!(
            safe_return_path(Some("/?category=Пирожки#catalog"), "/"),
            "/?category=Пирожки#catalog"
        );
        assert_eq!(safe_return_path(Some("/cart"), "/"), "/cart");
    }

    #[test]
    fn test_safe_return_path_rejects_offsite_targets() {
        assert_eq!(safe_return_path(Some("https://evil.example"), "/"), "/");
        assert_eq!(safe_return_path(Some("//evil.example"), "/"), "/");
        assert_eq!(safe_return_path(Some("/\\evil.example"), "/"), "/");
        assert_eq!(safe_return_path(Some("/a\r\nLocation: x"), "/"), "/");
        assert_eq!(safe_return_path(None, "/#catalog"), "/#catalog");
    }
}
