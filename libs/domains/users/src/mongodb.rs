//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::IndexOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{Role, UpdateUser, User};
use crate::repository::UserRepository;

/// MongoDB implementation of the UserRepository
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// Create a new MongoUserRepository over the `users` collection.
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<User>("users");
        Self { collection }
    }

    /// Create a repository with a custom collection name.
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<User>(collection_name);
        Self { collection }
    }

    /// Create the unique index on `email`.
    ///
    /// Called once at startup; the index backs the duplicate-email
    /// contract for inserts that race past the application-level check.
    pub async fn ensure_indexes(&self) -> UserResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection
            .create_index(index)
            .await
            .map_err(|e| UserError::Database(e.to_string()))?;

        tracing::info!("Unique index on users.email ensured");
        Ok(())
    }

    fn id_filter(id: Uuid) -> mongodb::bson::Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, user), fields(user_email = %user.email))]
    async fn insert(&self, user: User) -> UserResult<User> {
        // Duplicate-key failures convert to UserError::DuplicateEmail
        self.collection.insert_one(&user).await?;

        tracing::info!(user_id = %user.id, "User created successfully");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let user = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let user = self.collection.find_one(doc! { "email": email }).await?;
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> UserResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn list_by_role(&self, role: Role) -> UserResult<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! { "role": role.to_string() })
            .await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: Uuid, update: UpdateUser) -> UserResult<Option<User>> {
        let filter = Self::id_filter(id);

        // Absent id yields None, surfaced to the client as a null body
        let Some(existing) = self.collection.find_one(filter.clone()).await? else {
            return Ok(None);
        };

        let mut updated = existing;
        updated.apply_update(update);

        self.collection
            .replace_one(filter, &updated)
            .await
            .map_err(|e| UserError::Database(e.to_string()))?;

        tracing::info!(user_id = %id, "User updated successfully");
        Ok(Some(updated))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> UserResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_filter_uses_underscore_id() {
        let filter = MongoUserRepository::id_filter(Uuid::now_v7());
        assert!(filter.contains_key("_id"));
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_insert_and_find_by_email() {
        let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let repo = MongoUserRepository::new(client.database("bluetech_test"));
        repo.ensure_indexes().await.unwrap();

        let email = format!("{}@test.com", Uuid::new_v4());
        let user = User::new("Test".to_string(), email.clone(), "p".to_string(), Role::User);
        repo.insert(user).await.unwrap();

        let found = repo.find_by_email(&email).await.unwrap();
        assert!(found.is_some());
    }
}
