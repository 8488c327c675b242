pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::validation::Violation;

/// Single-message error body.
///
/// Returned for not-found, malformed-request and server-side failures:
///
/// ```json
/// { "error": "Resource not found" }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

/// Validation error body carrying the full ordered list of rule failures.
///
/// ```json
/// {
///   "errors": [
///     { "type": "field", "msg": "...", "path": "name", "location": "body" }
///   ]
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ValidationErrorBody {
    /// One entry per failed rule, in rule declaration order
    pub errors: Vec<Violation>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Infrastructure failures (database, I/O, serialization) map to a generic
/// 500 body while the detail goes to the logs. Domain-facing variants carry
/// the exact client message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation failed with {} error(s)", .0.len())]
    Validation(Vec<Violation>),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(violations) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    count = violations.len(),
                    "Validation failed"
                );
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorBody { errors: violations }),
                )
                    .into_response()
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = ErrorCode::InvalidJson.code(), "Bad request: {}", msg);
                error_response(StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = ErrorCode::NotFound.code(), "Not found: {}", msg);
                error_response(StatusCode::NOT_FOUND, msg)
            }
            AppError::SerdeJson(e) => {
                tracing::error!(
                    error_code = ErrorCode::SerdeJsonError.code(),
                    "JSON serialization error: {:?}",
                    e
                );
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::SerdeJsonError.default_message().to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!(
                    error_code = ErrorCode::DatabaseError.code(),
                    "Database error: {:?}",
                    e
                );
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DatabaseError.default_message().to_string(),
                )
            }
            AppError::Io(e) => {
                tracing::error!(error_code = ErrorCode::IoError.code(), "I/O error: {:?}", e);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::IoError.default_message().to_string(),
                )
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(
                    error_code = ErrorCode::InternalError.code(),
                    "Internal server error: {}",
                    msg
                );
                error_response(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(
                    error_code = ErrorCode::ServiceUnavailable.code(),
                    "Service unavailable: {}",
                    msg
                );
                error_response(StatusCode::SERVICE_UNAVAILABLE, msg)
            }
        }
    }
}

/// Build a single-message error response.
pub fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Rule, checks, run_rules};
    use serde_json::Value;

    #[test]
    fn test_validation_error_renders_400_with_errors_list() {
        let rules = [Rule::body("name", "name is required", checks::present)];
        let violations = run_rules(&rules, &[], &Value::Null);
        let response = AppError::Validation(violations).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_renders_404() {
        let response = AppError::NotFound("Resource not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_renders_500() {
        let response = AppError::Database(DbErr::Custom("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
