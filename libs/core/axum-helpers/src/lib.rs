//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`validation`]**: Declarative per-field validation rules and the violation aggregator
//! - **[`extractors`]**: Custom extractors (lenient raw JSON body)
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`http`]**: HTTP middleware (CORS, security headers) and the `{data: ...}` envelope
//! - **[`server`]**: Server setup, health checks, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes).await?;
//!
//!     let config = ServerConfig::default();
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

// Domain modules
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;
pub mod validation;

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_app, create_production_app,
    create_router, health_router, run_health_checks, shutdown_signal,
};

// Re-export HTTP helpers
pub use http::{DataBody, create_cors_layer, security_headers};

// Re-export error types
pub use errors::{AppError, ErrorBody, ErrorCode, ValidationErrorBody};

// Re-export extractors
pub use extractors::RawJson;

// Re-export validation machinery
pub use validation::{Rule, Violation, run_rules};
