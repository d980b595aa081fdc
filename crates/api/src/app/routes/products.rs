use std::sync::Arc;

use axum::Router;

use stockly_infra::RecordStore;
use stockly_products::Product;

use crate::app::routes::records::{self, Resource};
use crate::app::services::AppServices;

impl Resource for Product {
    fn store(services: &AppServices) -> &Arc<dyn RecordStore<Self>> {
        &services.products
    }
}

pub fn router() -> Router {
    records::router::<Product>()
}
