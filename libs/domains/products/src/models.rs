use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product entity as exposed to API clients.
///
/// Audit timestamps are stored but deliberately excluded from the
/// client-facing shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Product name
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    /// Unit price, always greater than zero
    #[schema(example = 300.0)]
    pub price: f64,
    /// Whether the product is currently available
    #[schema(example = true)]
    pub availability: bool,
}

/// DTO for creating a new product.
///
/// Availability is not part of the create payload; new products start
/// available.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
}

/// DTO for replacing an existing product (PUT semantics, all fields required).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProduct {
    pub name: String,
    pub price: f64,
    pub availability: bool,
}
