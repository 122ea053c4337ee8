//! Request ID middleware for request tracing and correlation.
//!
//! Reuses an `x-request-id` supplied by an upstream proxy, or generates a
//! UUID v4. The ID is recorded on the request span, tagged in Sentry, made
//! available to handlers through the [`RequestId`] extractor and echoed in
//! the response headers.

use axum::{
    extract::{FromRequestParts, Request},
    http::{HeaderValue, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream request ID accepted before a fresh one is generated.
const MAX_REQUEST_ID_LEN: usize = 128;

/// The ID of the request being handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    /// Reuse a well-formed upstream ID or generate a new one.
    fn from_header(value: Option<&HeaderValue>) -> Self {
        let upstream = value
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN);

        Self(upstream.map_or_else(|| Uuid::new_v4().to_string(), String::from))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Middleware that ensures every request has a unique request ID.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = RequestId::from_header(request.headers().get(REQUEST_ID_HEADER));

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", request_id.as_str());
    });

    let header = HeaderValue::from_str(request_id.as_str()).ok();
    request.extensions_mut().insert(request_id);

    let mut response = next.run(request).await;

    if let Some(value) = header {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Self>().cloned().unwrap_or_else(|| {
            tracing::warn!("Request ID not found in request extensions");
            Self(String::new())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_id_is_reused() {
        let header = HeaderValue::from_static("cf-1234");
        assert_eq!(RequestId::from_header(Some(&header)).as_str(), "cf-1234");
    }

    #[test]
    fn test_missing_or_oversized_id_is_regenerated() {
        let generated = RequestId::from_header(None);
        assert!(Uuid::parse_str(generated.as_str()).is_ok());

        let long = "x".repeat(MAX_REQUEST_ID_LEN + 1);
        let header = HeaderValue::from_str(&long).unwrap_or_else(|_| HeaderValue::from_static(""));
        let replaced = RequestId::from_header(Some(&header));
        assert_ne!(replaced.as_str(), long);
    }
}
