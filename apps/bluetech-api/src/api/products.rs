//! Product catalog routes
//!
//! Wires the products domain, including the image upload store.

use axum::Router;
use domain_products::{handlers, MongoProductRepository, ProductService};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let repository = MongoProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);

    handlers::router(service, state.uploads.clone())
}
