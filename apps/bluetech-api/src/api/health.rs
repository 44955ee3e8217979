//! Health check and API info endpoints
//!
//! Two health surfaces exist for compatibility with existing deploy
//! probes: `/api/health` reports MongoDB connectivity, while the root
//! `/health` is a plain liveness check that never touches the store.

use axum::{extract::State, routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;

#[derive(Serialize)]
struct ApiHealthResponse {
    status: String,
    mongodb: String,
    timestamp: String,
}

/// Router for /health under the /api prefix
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api_health))
        .with_state(state)
}

/// Router for the root-level liveness and info endpoints
pub fn root_router() -> Router {
    Router::new()
        .route("/", get(api_info))
        .route("/health", get(liveness))
}

/// Readiness check - verifies MongoDB connection
async fn api_health(State(state): State<AppState>) -> Json<ApiHealthResponse> {
    let mongodb_healthy = database::mongodb::check_health(&state.mongo_client).await;

    Json(ApiHealthResponse {
        status: "ok".to_string(),
        mongodb: if mongodb_healthy {
            "connected"
        } else {
            "disconnected"
        }
        .to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Liveness check
async fn liveness() -> Json<Value> {
    Json(json!({
        "status": "Backend API is running",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// API info served at the root path
async fn api_info() -> Json<Value> {
    Json(json!({
        "message": "BlueTech Backend API",
        "endpoints": {
            "auth": ["/api/auth/signup", "/api/auth/login"],
            "products": ["/api/products", "/api/products/:id"],
            "users": ["/api/users", "/api/users/:id"],
            "orders": ["/api/orders"],
            "health": "/health"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_root_liveness_does_not_need_mongo() {
        let app = root_router();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "Backend API is running");
        assert!(json["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_root_info_lists_endpoints() {
        let app = root_router();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "BlueTech Backend API");
        assert_eq!(json["endpoints"]["health"], "/health");
    }
}
