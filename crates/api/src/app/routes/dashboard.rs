use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::app::services::AppServices;
use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/summary", get(summary))
        .route("/low-stock", get(low_stock))
        .route("/overview", get(overview))
}

pub async fn summary(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.dashboard.summary().await {
        Ok(s) => (StatusCode::OK, Json(s)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn low_stock(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.dashboard.low_stock().await {
        Ok(items) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "threshold": services.dashboard.policy().threshold(),
                "items": items,
            })),
        )
            .into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn overview(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.dashboard.overview().await {
        Ok(o) => (StatusCode::OK, Json(o)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
