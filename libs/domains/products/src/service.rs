use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
///
/// Maps missing rows to [`ProductError::NotFound`] so handlers only deal
/// with products that exist.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        self.repository.create(input).await
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List all products, newest first
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Replace a product
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Flip a product's availability flag
    pub async fn toggle_availability(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .toggle_availability(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn sample() -> Product {
        Product {
            id: 1,
            name: "Mouse".to_string(),
            price: 140.0,
            availability: true,
        }
    }

    #[tokio::test]
    async fn test_get_product_returns_found_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(1))
            .returning(|_| Ok(Some(sample())));

        let service = ProductService::new(mock_repo);
        let product = service.get_product(1).await.unwrap();

        assert_eq!(product.id, 1);
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.get_product(99).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_update_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().returning(|_, _| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service
            .update_product(
                5,
                UpdateProduct {
                    name: "x".to_string(),
                    price: 1.0,
                    availability: true,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_toggle_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_toggle_availability()
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.toggle_availability(7).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(7)));
    }

    #[tokio::test]
    async fn test_delete_missing_product_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().with(eq(3)).returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        let err = service.delete_product(3).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(3)));
    }

    #[tokio::test]
    async fn test_delete_existing_product_succeeds() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().with(eq(1)).returning(|_| Ok(true));

        let service = ProductService::new(mock_repo);
        service.delete_product(1).await.unwrap();
    }
}
