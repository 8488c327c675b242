//! Custom axum extractors.

pub mod raw_json;

pub use raw_json::RawJson;
