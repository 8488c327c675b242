//! HTTP-layer building blocks shared by API services.

pub mod body;
pub mod cors;
pub mod security;

pub use body::DataBody;
pub use cors::create_cors_layer;
pub use security::security_headers;
