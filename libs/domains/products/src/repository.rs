use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{Product, UpdateProduct};

/// Repository abstraction over the product store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product.
    async fn insert(&self, product: Product) -> ProductResult<Product>;

    /// Find a product by id.
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// List all products, newest first.
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Update a product; returns None when the id is unknown.
    async fn update(&self, id: Uuid, update: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Delete a product; returns whether a document was removed.
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;
}
