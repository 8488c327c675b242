//! Reusable OpenAPI response types for consistent API documentation.

use super::{ErrorBody, ValidationErrorBody};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "errors": [{
            "type": "field",
            "value": "",
            "msg": "Request validation failed",
            "path": "name",
            "location": "body"
        }]
    })
)]
pub struct BadRequestValidationResponse(pub ValidationErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "Resource not found"
    })
)]
pub struct NotFoundResponse(pub ErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable",
    content_type = "application/json",
    example = json!({
        "error": "Service is temporarily unavailable"
    })
)]
pub struct ServiceUnavailableResponse(pub ErrorBody);
