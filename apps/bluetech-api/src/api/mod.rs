//! API routes module
//!
//! Wires the domain crates and the pass-through endpoints into the
//! routes nested under /api.

pub mod frontend;
pub mod health;
pub mod orders;
pub mod products;
pub mod users;

use axum::Router;
use eyre::Result;
use mongodb::Database;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(users::routers(state))
        .nest("/products", products::router(state))
        .merge(orders::router())
        .merge(health::api_router(state.clone()))
}

/// Create collection indexes at startup
pub async fn init_indexes(db: &Database) -> Result<()> {
    domain_users::MongoUserRepository::new(db.clone())
        .ensure_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create user indexes: {}", e))?;
    Ok(())
}
