//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Bson},
    Collection, Database,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, UpdateProduct};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository over the `products` collection.
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create a repository with a custom collection name.
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    fn id_filter(id: Uuid) -> mongodb::bson::Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn insert(&self, product: Product) -> ProductResult<Product> {
        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;
        Ok(products)
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: Uuid, update: UpdateProduct) -> ProductResult<Option<Product>> {
        let filter = Self::id_filter(id);

        let Some(existing) = self.collection.find_one(filter.clone()).await? else {
            return Ok(None);
        };

        let mut updated = existing;
        updated.apply_update(update);

        self.collection
            .replace_one(filter, &updated)
            .await
            .map_err(|e| ProductError::Database(e.to_string()))?;

        tracing::info!(product_id = %id, "Product updated successfully");
        Ok(Some(updated))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_filter_uses_underscore_id() {
        let filter = MongoProductRepository::id_filter(Uuid::now_v7());
        assert!(filter.contains_key("_id"));
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_list_returns_newest_first() {
        let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let repo = MongoProductRepository::with_collection(
            client.database("bluetech_test"),
            &format!("products_{}", Uuid::new_v4().simple()),
        );

        for name in ["first", "second"] {
            let product = Product::new(name.to_string(), String::new(), 1.0, None);
            repo.insert(product).await.unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        let products = repo.list().await.unwrap();
        assert_eq!(products[0].name, "second");
    }
}
