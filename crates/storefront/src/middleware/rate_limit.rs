//! Rate limiting middleware using governor and `tower_governor`.
//!
//! Only the form endpoints (add to cart, pick date, save order form) are
//! limited; page views are not.
//!
//! Requests are keyed by client IP. Proxy headers are only honoured when
//! `BAKERY_TRUST_PROXY` is set, since any client can send them; without a
//! proxy in front the TCP peer address is the key.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::ConnectInfo;
use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{GovernorError, GovernorLayer, governor::GovernorConfigBuilder};

/// Proxy headers consulted for the client IP, in order of trust.
const CLIENT_IP_HEADERS: [&str; 3] = ["cf-connecting-ip", "x-real-ip", "x-forwarded-for"];

/// Key extractor for the client IP.
///
/// Behind a trusted proxy the proxy-supplied headers win; the TCP peer
/// address is the fallback, and the only source when the proxy is not trusted.
#[derive(Clone, Copy, Debug)]
pub struct ClientIpKeyExtractor {
    trust_proxy: bool,
}

impl ClientIpKeyExtractor {
    #[must_use]
    pub const fn new(trust_proxy: bool) -> Self {
        Self { trust_proxy }
    }

    fn from_headers(headers: &axum::http::HeaderMap) -> Option<IpAddr> {
        CLIENT_IP_HEADERS.iter().find_map(|name| {
            headers
                .get(*name)
                .and_then(|v| v.to_str().ok())
                // X-Forwarded-For lists the original client first
                .and_then(|s| s.split(',').next())
                .and_then(|s| s.trim().parse::<IpAddr>().ok())
        })
    }

    fn client_ip<T>(self, req: &Request<T>) -> Option<IpAddr> {
        self.trust_proxy
            .then(|| Self::from_headers(req.headers()))
            .flatten()
            .or_else(|| {
                req.extensions()
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip())
            })
    }
}

impl tower_governor::key_extractor::KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        self.client_ip(req)
            .ok_or(GovernorError::UnableToExtractKey)
    }
}

/// Rate limiter layer type for Axum.
pub type RateLimiterLayer =
    GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Create rate limiter for form posts: ~120 requests per minute per IP.
///
/// Configuration: 1 token replenished every 500ms, burst of 30. Generous for
/// a visitor clicking "В корзину" repeatedly, tight enough to stop scripted
/// floods of the session store.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid positive
/// integers, which are always accepted by `GovernorConfigBuilder`.
#[must_use]
pub fn form_rate_limiter(trust_proxy: bool) -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(ClientIpKeyExtractor::new(trust_proxy))
        .per_millisecond(500)
        .burst_size(30)
        .finish()
        .expect("rate limiter config with per_millisecond(500) and burst_size(30) is valid");
    GovernorLayer::new(Arc::new(config))
}
