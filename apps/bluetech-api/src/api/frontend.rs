//! Static front-end serving with an SPA catch-all
//!
//! When a built front-end is deployed next to the API, its assets are
//! served from the root path and any unmatched GET falls back to
//! `index.html` so client-side routing works on refresh. Without a
//! deployed front-end the catch-all degrades to a JSON 404.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::State,
    http::Method,
    response::{Html, IntoResponse, Response},
    routing::any,
    Router,
};
use axum_helpers::errors::handlers::not_found;
use tower_http::services::ServeDir;

/// Attach static serving and the SPA catch-all as the app's fallback.
pub fn attach(app: Router, frontend_dir: &str) -> Router {
    let dir = Arc::new(PathBuf::from(frontend_dir));
    let spa = any(spa_fallback).with_state(Arc::clone(&dir));

    app.fallback_service(
        ServeDir::new(dir.as_path())
            .call_fallback_on_method_not_allowed(true)
            .fallback(spa),
    )
}

async fn spa_fallback(State(dir): State<Arc<PathBuf>>, method: Method) -> Response {
    if method == Method::GET {
        let index = dir.join("index.html");
        if let Ok(contents) = tokio::fs::read_to_string(&index).await {
            return Html(contents).into_response();
        }
    }
    not_found().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_unmatched_get_serves_index_html() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("index.html"), "<html>app</html>").unwrap();
        let app = attach(Router::new(), tmp.path().to_str().unwrap());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/client/side/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"<html>app</html>");
    }

    #[tokio::test]
    async fn test_missing_index_returns_json_404() {
        let tmp = tempfile::tempdir().unwrap();
        let app = attach(Router::new(), tmp.path().to_str().unwrap());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/client/side/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["message"], "Not found");
    }

    #[tokio::test]
    async fn test_existing_asset_is_served_directly() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("index.html"), "<html>app</html>").unwrap();
        std::fs::write(tmp.path().join("main.css"), "body{}").unwrap();
        let app = attach(Router::new(), tmp.path().to_str().unwrap());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/main.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"body{}");
    }
}
