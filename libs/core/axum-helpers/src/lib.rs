//! # Axum Helpers
//!
//! A collection of utilities and middleware for building Axum web
//! applications.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses
//! - **[`middleware`]**: HTTP middleware (CORS, security headers)
//! - **[`server`]**: Server setup, router assembly, graceful shutdown

pub mod errors;
pub mod middleware;
pub mod server;
pub mod shutdown;

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export middleware helpers
pub use middleware::{create_cors_layer, create_permissive_cors_layer, security_headers};

// Re-export server types
pub use server::{create_app, create_production_app, create_router};
pub use shutdown::{shutdown_signal, ShutdownCoordinator};
