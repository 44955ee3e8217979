//! Users Domain
//!
//! Domain implementation for user accounts and authentication backed by
//! MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/auth, /users)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules (uniqueness, defaults)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Security note
//!
//! Passwords are stored as given and compared by exact equality — no
//! hashing, no salting. This reproduces the contract of the system this
//! service replaces and is a known deficiency; do not treat this crate
//! as a template for credential handling.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use handlers::{AuthApiDoc, UsersApiDoc};
pub use models::{CreateUser, LoginRequest, Role, UpdateUser, User, UserResponse};
pub use mongodb::MongoUserRepository;
pub use repository::UserRepository;
pub use service::UserService;
