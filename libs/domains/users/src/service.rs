//! User Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, LoginRequest, Role, UpdateUser, User};
use crate::repository::UserRepository;

/// User service handling signup, login, and admin user management.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Register a new account.
    ///
    /// Requires name, email, and password; rejects an already-registered
    /// email. The email check and the insert are not atomic: a
    /// concurrent signup for the same email can race past the check and
    /// is caught by the unique index instead. The role defaults to
    /// `user` when omitted.
    #[instrument(skip(self, input))]
    pub async fn signup(&self, input: CreateUser) -> UserResult<User> {
        let (Some(name), Some(email), Some(password)) =
            (input.name, input.email, input.password)
        else {
            return Err(UserError::MissingFields);
        };
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(UserError::MissingFields);
        }

        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(UserError::DuplicateEmail);
        }

        let user = User::new(name, email, password, input.role.unwrap_or_default());
        self.repository.insert(user).await
    }

    /// Authenticate by email and password.
    ///
    /// The stored password is compared by exact equality — plaintext,
    /// case-sensitive, no normalization. Lookup failure and password
    /// mismatch are indistinguishable to the caller.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginRequest) -> UserResult<User> {
        let user = self.repository.find_by_email(&input.email).await?;

        match user {
            Some(user) if user.password == input.password => Ok(user),
            _ => Err(UserError::InvalidCredentials),
        }
    }

    /// Admin add-user endpoint.
    ///
    /// Rejects a duplicate email up front; a document missing required
    /// fields is refused by the store layer and surfaces as a store
    /// error, matching the original endpoint which had no field checks
    /// of its own.
    #[instrument(skip(self, input))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        if let Some(ref email) = input.email {
            if self.repository.find_by_email(email).await?.is_some() {
                return Err(UserError::DuplicateEmail);
            }
        }

        let (Some(name), Some(email), Some(password)) =
            (input.name, input.email, input.password)
        else {
            return Err(UserError::Database(
                "users validation failed: name, email and password are required".to_string(),
            ));
        };

        let user = User::new(name, email, password, input.role.unwrap_or_default());
        self.repository.insert(user).await
    }

    /// List all users.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// List users whose role is exactly the given role.
    #[instrument(skip(self))]
    pub async fn list_users_by_role(&self, role: Role) -> UserResult<Vec<User>> {
        self.repository.list_by_role(role).await
    }

    /// Update any subset of user fields.
    ///
    /// Returns None for an unknown id; the handler surfaces that as a
    /// 200 with a null body rather than a 404 (inherited asymmetry with
    /// the product endpoints).
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: Uuid, input: UpdateUser) -> UserResult<Option<User>> {
        self.repository.update(id, input).await
    }

    /// Delete a user. Succeeds whether or not the id existed.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
