use axum::Router;
use sea_orm::DatabaseConnection;

pub mod health;

use domain_products::{PgProductRepository, ProductService};

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes(db: &DatabaseConnection) -> Router {
    let service = ProductService::new(PgProductRepository::new(db.clone()));

    Router::new().nest("/products", domain_products::handlers::router(service))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`. The /ready endpoint checks the database connection.
pub fn ready_router(db: DatabaseConnection) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(db)
}
