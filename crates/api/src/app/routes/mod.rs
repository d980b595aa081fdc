use axum::Router;

pub mod dashboard;
pub mod products;
pub mod records;
pub mod sales;
pub mod system;

/// Router for all record and reporting endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/sales", sales::router())
        .nest("/dashboard", dashboard::router())
}
