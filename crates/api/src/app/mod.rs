//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: record stores and the dashboard service
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: JSON response helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use stockly_infra::{StoreError, seed_products};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router.
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/", get(routes::system::banner))
        .route("/health", get(routes::system::health))
        .route("/health/store", get(routes::system::store_health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Run the startup sequence: seed the product store, then build the router.
///
/// A store error here means the process must not start serving.
pub async fn start(services: Arc<AppServices>) -> Result<Router, StoreError> {
    let outcome = seed_products(services.products.as_ref()).await?;
    tracing::info!(?outcome, "startup seeding finished");
    Ok(build_app(services))
}
