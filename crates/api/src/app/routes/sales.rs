use std::sync::Arc;

use axum::Router;

use stockly_infra::RecordStore;
use stockly_sales::{SalesItem, SalesOrder};

use crate::app::routes::records::{self, Resource};
use crate::app::services::AppServices;

impl Resource for SalesOrder {
    fn store(services: &AppServices) -> &Arc<dyn RecordStore<Self>> {
        &services.sales_orders
    }
}

impl Resource for SalesItem {
    fn store(services: &AppServices) -> &Arc<dyn RecordStore<Self>> {
        &services.sales_items
    }
}

pub fn router() -> Router {
    Router::new()
        .nest("/orders", records::router::<SalesOrder>())
        .nest("/items", records::router::<SalesItem>())
}
