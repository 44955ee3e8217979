use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User roles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// User entity - represents a user document stored in MongoDB.
///
/// The password is persisted exactly as supplied (no hashing); this is
/// the inherited contract, flagged in the crate docs. HTTP responses
/// must go through [`UserResponse`], which drops the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique across the collection)
    pub email: String,
    /// Plaintext password
    pub password: String,
    /// Account role
    pub role: Role,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with store-assigned id and timestamps.
    pub fn new(name: String, email: String, password: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name,
            email,
            password,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from an UpdateUser DTO.
    ///
    /// Fields left unset by the client are dropped before the write,
    /// matching the behavior of the original store driver.
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(password) = update.password {
            self.password = password;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        self.updated_at = Utc::now();
    }
}

/// User response DTO - a user without the password field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for creating a user (signup and admin add).
///
/// All fields are optional at the wire level; required-field checks are
/// performed explicitly per endpoint.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// DTO for updating an existing user; any subset of fields.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

/// Login request body.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults_to_user() {
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn test_role_round_trip() {
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert!("moderator".parse::<Role>().is_err());
        assert_eq!(Role::Admin.to_string(), "admin");
    }

    #[test]
    fn test_new_user_sets_timestamps_and_id() {
        let user = User::new(
            "A".to_string(),
            "a@x.com".to_string(),
            "p".to_string(),
            Role::User,
        );
        assert_eq!(user.created_at, user.updated_at);
        assert!(!user.id.is_nil());
    }

    #[test]
    fn test_apply_update_skips_unset_fields() {
        let mut user = User::new(
            "A".to_string(),
            "a@x.com".to_string(),
            "p".to_string(),
            Role::User,
        );
        let before = user.updated_at;

        user.apply_update(UpdateUser {
            name: Some("B".to_string()),
            ..Default::default()
        });

        assert_eq!(user.name, "B");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.password, "p");
        assert_eq!(user.role, Role::User);
        assert!(user.updated_at >= before);
    }

    #[test]
    fn test_user_response_has_no_password() {
        let user = User::new(
            "A".to_string(),
            "a@x.com".to_string(),
            "secret".to_string(),
            Role::Admin,
        );
        let value = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["role"], "admin");
    }

    #[test]
    fn test_entity_serializes_id_as_underscore_id() {
        let user = User::new(
            "A".to_string(),
            "a@x.com".to_string(),
            "p".to_string(),
            Role::User,
        );
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("_id").is_some());
    }
}
