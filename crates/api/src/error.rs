use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use todo_core::error::CoreError;

/// Client-facing message for every failure that must not leak detail.
const INTERNAL_MESSAGE: &str = "an internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{"error": <message>}` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::TitleRequired
                | CoreError::NameRequired
                | CoreError::InvalidPriority
                | CoreError::Validation(_) => (StatusCode::BAD_REQUEST, core.to_string()),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - Check constraint violations (`23514`) map to 400.
/// - Foreign key violations (`23503`) map to 400; they only happen when a
///   referenced category disappears mid-request.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23514") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                (
                    StatusCode::BAD_REQUEST,
                    format!("value violates check constraint: {constraint}"),
                )
            }
            Some("23503") => (
                StatusCode::BAD_REQUEST,
                "referenced category does not exist".to_string(),
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
        }
    }
}
