//! Lenient JSON body extractor for rule-based validation.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::errors::AppError;

/// Extracts the request body as a raw [`serde_json::Value`].
///
/// Validation rules inspect the raw value field by field, so the handler must
/// see the body before any typed deserialization. An absent or empty body
/// yields [`Value::Null`], which rules treat the same as missing fields.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::RawJson;
///
/// async fn create(RawJson(body): RawJson) -> String {
///     format!("got: {body}")
/// }
/// ```
pub struct RawJson(pub Value);

impl<S> FromRequest<S> for RawJson
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| e.into_response())?;

        if bytes.is_empty() {
            return Ok(RawJson(Value::Null));
        }

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::BadRequest(format!("Invalid JSON in request body: {e}")).into_response()
        })?;

        Ok(RawJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request as HttpRequest, http::StatusCode, routing::post};
    use tower::ServiceExt;

    async fn echo(RawJson(body): RawJson) -> String {
        body.to_string()
    }

    fn app() -> Router {
        Router::new().route("/", post(echo))
    }

    #[tokio::test]
    async fn test_empty_body_becomes_null() {
        let response = app()
            .oneshot(HttpRequest::post("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"null");
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let response = app()
            .oneshot(
                HttpRequest::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_valid_json_passes_through() {
        let response = app()
            .oneshot(
                HttpRequest::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"Mouse"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
