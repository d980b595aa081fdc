use std::sync::Arc;

use sqlx::PgPool;

use stockly_infra::{
    AppConfig, DashboardService, InMemoryRecordStore, RecordStore, StoreError, db,
    store::{
        CascadingOrderStore, CheckedItemStore, GuardedProductStore, PostgresProductStore,
        PostgresSalesItemStore, PostgresSalesOrderStore,
    },
};
use stockly_products::Product;
use stockly_reporting::LowStockPolicy;
use stockly_sales::{SalesItem, SalesOrder};

/// Everything the handlers need, wired once at process entry.
#[derive(Clone)]
pub struct AppServices {
    pub products: Arc<dyn RecordStore<Product>>,
    pub sales_orders: Arc<dyn RecordStore<SalesOrder>>,
    pub sales_items: Arc<dyn RecordStore<SalesItem>>,
    pub dashboard: DashboardService,
}

impl AppServices {
    /// In-memory stores (dev/test). Data lives as long as the process.
    ///
    /// The stores are wrapped so that item references, order cascades and
    /// product deletes behave as the Postgres schema makes them behave.
    pub fn in_memory(policy: LowStockPolicy) -> Self {
        let raw_products: Arc<dyn RecordStore<Product>> =
            Arc::new(InMemoryRecordStore::<Product>::new());
        let raw_orders: Arc<dyn RecordStore<SalesOrder>> =
            Arc::new(InMemoryRecordStore::<SalesOrder>::new());
        let raw_items: Arc<dyn RecordStore<SalesItem>> =
            Arc::new(InMemoryRecordStore::<SalesItem>::new());

        let products: Arc<dyn RecordStore<Product>> =
            Arc::new(GuardedProductStore::new(raw_products.clone(), raw_items.clone()));
        let sales_orders: Arc<dyn RecordStore<SalesOrder>> =
            Arc::new(CascadingOrderStore::new(raw_orders.clone(), raw_items.clone()));
        let sales_items: Arc<dyn RecordStore<SalesItem>> =
            Arc::new(CheckedItemStore::new(raw_items, raw_orders, raw_products));

        Self {
            dashboard: DashboardService::new(products.clone(), sales_orders.clone(), policy),
            products,
            sales_orders,
            sales_items,
        }
    }

    /// Postgres-backed stores sharing one pool.
    pub fn postgres(pool: PgPool, policy: LowStockPolicy) -> Self {
        let products: Arc<dyn RecordStore<Product>> =
            Arc::new(PostgresProductStore::new(pool.clone()));
        let sales_orders: Arc<dyn RecordStore<SalesOrder>> =
            Arc::new(PostgresSalesOrderStore::new(pool.clone()));
        Self {
            dashboard: DashboardService::new(products.clone(), sales_orders.clone(), policy),
            products,
            sales_orders,
            sales_items: Arc::new(PostgresSalesItemStore::new(pool)),
        }
    }

    /// Pick the backend from configuration: Postgres when `database.url`
    /// is set (connect + migrate), in-memory otherwise.
    pub async fn from_config(config: &AppConfig) -> Result<Self, StoreError> {
        let policy = config.reporting.low_stock_policy();
        match &config.database.url {
            Some(url) => {
                let pool = db::connect(url, &config.database).await?;
                db::migrate(&pool).await?;
                Ok(Self::postgres(pool, policy))
            }
            None => {
                tracing::warn!("database.url not set; using in-memory stores (data is lost on exit)");
                Ok(Self::in_memory(policy))
            }
        }
    }
}
