//! Order intake endpoint
//!
//! Orders are acknowledged and echoed back to the caller; nothing is
//! persisted. Fulfilment happens out of band.

use axum::{routing::post, Json, Router};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

#[derive(Serialize)]
struct OrderReceipt {
    message: String,
    order: Value,
}

/// Create orders router
pub fn router() -> Router {
    Router::new().route("/orders", post(receive_order))
}

/// Accept an order payload of any shape and echo it back
async fn receive_order(Json(order): Json<Value>) -> Json<OrderReceipt> {
    info!("Order received");

    Json(OrderReceipt {
        message: "Order received".to_string(),
        order,
    })
}
