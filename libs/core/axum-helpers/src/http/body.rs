use serde::Serialize;
use utoipa::ToSchema;

/// Envelope wrapping every successful response payload under a `data` key.
///
/// ```json
/// { "data": { "id": 1, "name": "Mouse" } }
/// ```
#[derive(Serialize, ToSchema)]
pub struct DataBody<T> {
    pub data: T,
}

impl<T> DataBody<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
