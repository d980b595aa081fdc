use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use chrono::Utc;

use crate::app::services::AppServices;

pub async fn banner() -> &'static str {
    "Inventory backend is running"
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Round-trip to the product store to report whether it answers.
pub async fn store_health(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products.count().await {
        Ok(products) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "store": "connected",
                "products": products,
                "time": Utc::now().to_rfc3339(),
            })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "status": "error",
                "store": "not connected",
                "message": e.to_string(),
            })),
        )
            .into_response(),
    }
}
