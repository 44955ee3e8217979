use async_trait::async_trait;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{Role, UpdateUser, User};

/// Repository trait for User persistence.
///
/// The gateway needs: list, filtered list, lookup by id and by email,
/// insert, update-returning-new-value, and delete. Implementations must
/// surface duplicate-key failures distinctly (see `UserError`).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user document
    async fn insert(&self, user: User) -> UserResult<User>;

    /// Get a user by id
    async fn find_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Get a user by email
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// List all users
    async fn list(&self) -> UserResult<Vec<User>>;

    /// List users with the given role
    async fn list_by_role(&self, role: Role) -> UserResult<Vec<User>>;

    /// Update a user; returns None when the id does not exist
    async fn update(&self, id: Uuid, update: UpdateUser) -> UserResult<Option<User>>;

    /// Delete a user; returns whether a document was removed
    async fn delete(&self, id: Uuid) -> UserResult<bool>;
}
