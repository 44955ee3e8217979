//! Auth and user management routes
//!
//! Wires the users domain to HTTP routes.

use axum::Router;
use domain_users::{handlers, MongoUserRepository, UserService};

use crate::state::AppState;

/// Create the /auth and /users routers over the shared users collection
pub fn routers(state: &AppState) -> Router {
    let repository = MongoUserRepository::new(state.db.clone());
    let service = UserService::new(repository);

    Router::new()
        .nest("/auth", handlers::auth_router(service.clone()))
        .nest("/users", handlers::router(service))
}
