//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{coerce_price, CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service over an abstract repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a product from form input.
    ///
    /// Missing name and description become empty strings and a missing
    /// or unparseable price becomes 0; product creation never rejects
    /// on field content.
    #[instrument(skip(self, input))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(
            input.name.unwrap_or_default(),
            input.description.unwrap_or_default(),
            coerce_price(input.price.as_deref()),
            input.image_url,
        );
        self.repository.insert(product).await
    }

    /// Fetch one product or fail with NotFound.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// List all products, newest first.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Update a product; returns None when the id is unknown.
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        id: Uuid,
        input: UpdateProduct,
    ) -> ProductResult<Option<Product>> {
        self.repository.update(id, input).await
    }

    /// Delete a product. Succeeds whether or not the id existed.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;

    #[tokio::test]
    async fn test_create_product_defaults_blank_fields() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert().returning(Ok);
        let service = ProductService::new(repo);

        let product = service
            .create_product(CreateProduct::default())
            .await
            .unwrap();

        assert_eq!(product.name, "");
        assert_eq!(product.price, 0.0);
        assert!(product.image_url.is_none());
    }

    #[tokio::test]
    async fn test_create_product_coerces_price_string() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert().returning(Ok);
        let service = ProductService::new(repo);

        let product = service
            .create_product(CreateProduct {
                name: Some("Widget".to_string()),
                description: Some("A widget".to_string()),
                price: Some(" 19.99 ".to_string()),
                image_url: Some("/uploads/w.png".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(product.price, 19.99);
        assert_eq!(product.image_url.as_deref(), Some("/uploads/w.png"));
    }

    #[tokio::test]
    async fn test_get_unknown_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let service = ProductService::new(repo);

        let result = service.get_product(Uuid::now_v7()).await;

        assert!(matches!(result, Err(ProductError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_unknown_product_succeeds() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().returning(|_| Ok(false));
        let service = ProductService::new(repo);

        assert!(service.delete_product(Uuid::now_v7()).await.is_ok());
    }
}
