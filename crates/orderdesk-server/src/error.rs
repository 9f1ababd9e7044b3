use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use orderdesk_core::error::OrderdeskError;

// ---------------------------------------------------------------------------
// Internal sentinel for explicit 401 rejections
// ---------------------------------------------------------------------------

/// Private sentinel carrying an explicit HTTP 401 through the `anyhow::Error`
/// chain. The message is always generic — the response must never reveal
/// which authentication check failed.
#[derive(Debug)]
struct UnauthorizedError;

impl std::fmt::Display for UnauthorizedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid credentials or token")
    }
}

impl std::error::Error for UnauthorizedError {}

/// Private sentinel carrying an explicit HTTP 400 through the
/// `anyhow::Error` chain without touching the `OrderdeskError` enum.
#[derive(Debug)]
struct BadRequestError(String);

impl std::fmt::Display for BadRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BadRequestError {}

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Generic 401: invalid credentials, invalid token, or no session.
    pub fn unauthorized() -> Self {
        Self(UnauthorizedError.into())
    }

    /// Construct a 400 Bad Request error with the given message.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(BadRequestError(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Check for explicit sentinel types before falling through to
        // OrderdeskError.
        if self.0.downcast_ref::<UnauthorizedError>().is_some() {
            let body = serde_json::json!({ "error": UnauthorizedError.to_string() });
            return (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response();
        }
        if let Some(b) = self.0.downcast_ref::<BadRequestError>() {
            let body = serde_json::json!({ "error": b.0.clone() });
            return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
        }

        let status = if let Some(e) = self.0.downcast_ref::<OrderdeskError>() {
            match e {
                OrderdeskError::OrderNotFound(_) => StatusCode::NOT_FOUND,
                OrderdeskError::InvalidStatus(_) | OrderdeskError::InvalidHours { .. } => {
                    StatusCode::BAD_REQUEST
                }
                OrderdeskError::DuplicateOrderId(_)
                | OrderdeskError::MissingColumn(_)
                | OrderdeskError::MissingSecret
                | OrderdeskError::Export(_)
                | OrderdeskError::Io(_)
                | OrderdeskError::Csv(_)
                | OrderdeskError::Yaml(_)
                | OrderdeskError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "error": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
