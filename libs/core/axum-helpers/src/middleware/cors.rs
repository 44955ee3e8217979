use axum::http::{header, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer with an explicit origin allow-list.
///
/// # Returns
/// A configured `CorsLayer` with:
/// - The supplied allowed origins
/// - Methods GET, POST, PUT, DELETE, OPTIONS
/// - Headers Content-Type and Authorization
/// - Credentials allowed
/// - 1 hour max age
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer allowing any origin.
///
/// Used when no public front-end origin is configured. Credentials are
/// not allowed here: tower-http rejects the wildcard/credentials
/// combination.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
