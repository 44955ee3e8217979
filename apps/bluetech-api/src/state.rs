//! Application state management.
//!
//! Shared state passed to the route builders: configuration, the
//! MongoDB client and database handle, and the image upload store.

use domain_products::UploadStore;
use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned per use (inexpensive Arc clones inside the client and store).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
    /// On-disk store for uploaded product images
    pub uploads: UploadStore,
}
