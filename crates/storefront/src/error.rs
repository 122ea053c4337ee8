//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bakery_core::{DeliveryDate, DeliveryDateError};
use thiserror::Error;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading or writing the visitor session failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// The visitor picked an unusable delivery date.
    #[error("Invalid delivery date: {0}")]
    DeliveryDate(#[from] DeliveryDateError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Session(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let (status, message) = match &self {
            Self::Session(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
            Self::DeliveryDate(DeliveryDateError::TooEarly { earliest, .. }) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Доставка возможна не раньше {}",
                    DeliveryDate::new(*earliest).format_long()
                ),
            ),
            Self::DeliveryDate(DeliveryDateError::Invalid(_)) => (
                StatusCode::BAD_REQUEST,
                "Некорректная дата доставки".to_string(),
            ),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for visitor actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added product", Some(&[("product_id", "2")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::to_bytes;
    use chrono::NaiveDate;

    use super::*;

    async fn status_and_body(err: AppError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(DeliveryDateError::Invalid("08.03.2024".to_string()));
        assert_eq!(
            err.to_string(),
            "Invalid delivery date: invalid date '08.03.2024', expected YYYY-MM-DD"
        );
    }

    #[tokio::test]
    async fn test_too_early_names_first_available_day() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let err = AppError::from(DeliveryDateError::TooEarly {
            date: day,
            earliest: day.succ_opt().unwrap(),
        });

        let (status, body) = status_and_body(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Доставка возможна не раньше 16 января 2024");
    }

    #[tokio::test]
    async fn test_invalid_date_is_bad_request() {
        let err = AppError::from(DeliveryDateError::Invalid(String::new()));
        let (status, body) = status_and_body(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Некорректная дата доставки");
    }
}
