use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// List all products, newest id first
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Replace an existing product, returning None if it does not exist
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Flip the availability flag, returning None if the product does not exist
    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Delete a product by ID, returning whether a row was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    next_id: i32,
    products: HashMap<i32, Product>,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        store.next_id += 1;
        let product = Product {
            id: store.next_id,
            name: input.name,
            price: input.price,
            availability: true,
        };
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;

        let mut result: Vec<Product> = store.products.values().cloned().collect();
        result.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(result)
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        let Some(product) = store.products.get_mut(&id) else {
            return Ok(None);
        };

        product.name = input.name;
        product.price = input.price;
        product.availability = input.availability;
        let updated = product.clone();

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(updated))
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        let Some(product) = store.products.get_mut(&id) else {
            return Ok(None);
        };

        product.availability = !product.availability;
        let updated = product.clone();

        tracing::info!(
            product_id = id,
            availability = updated.availability,
            "Toggled product availability"
        );
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse() -> CreateProduct {
        CreateProduct {
            name: "Mouse".to_string(),
            price: 140.0,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids_and_defaults_availability() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(mouse()).await.unwrap();
        let second = repo
            .create(CreateProduct {
                name: "Teclado".to_string(),
                price: 80.0,
            })
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.availability);
    }

    #[tokio::test]
    async fn test_list_orders_by_id_descending() {
        let repo = InMemoryProductRepository::new();
        for name in ["a", "b", "c"] {
            repo.create(CreateProduct {
                name: name.to_string(),
                price: 1.0,
            })
            .await
            .unwrap();
        }

        let products = repo.list().await.unwrap();
        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(mouse()).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateProduct {
                    name: "Mouse Gamer".to_string(),
                    price: 200.0,
                    availability: false,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Mouse Gamer");
        assert_eq!(updated.price, 200.0);
        assert!(!updated.availability);
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_none() {
        let repo = InMemoryProductRepository::new();
        let result = repo
            .update(
                99,
                UpdateProduct {
                    name: "x".to_string(),
                    price: 1.0,
                    availability: true,
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_availability() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(mouse()).await.unwrap();

        let once = repo.toggle_availability(created.id).await.unwrap().unwrap();
        assert!(!once.availability);

        let twice = repo.toggle_availability(created.id).await.unwrap().unwrap();
        assert_eq!(twice.availability, created.availability);
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(mouse()).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }
}
