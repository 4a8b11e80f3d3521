//! Error conversions - HTTP mapping
//!
//! Behind the `axum` feature, renders [`AppError`] as the JSON error envelope.

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

/// Renders `{"error": "<message>"}` with the kind's status code.
/// 5xx responses carry only a generic message.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({ "error": self.client_message() });

        (status, Json(body)).into_response()
    }
}
