//! Dashboard figures computed on demand from the product and sales stores.

use std::sync::Arc;

use serde::Serialize;
use tracing::instrument;

use stockly_products::Product;
use stockly_reporting::{
    DashboardSummary, LowStockPolicy, SalesFigures, inventory_value, low_stock, recent_sales,
    sales_figures, summarize, top_by_stock_value,
};
use stockly_sales::SalesOrder;

use crate::store::{RecordStore, StoreError};

/// Number of products listed in the overview's top-value ranking.
pub const TOP_PRODUCTS: usize = 5;

/// Number of orders listed under recent sales.
pub const RECENT_SALES: usize = 5;

/// Richer dashboard payload: the summary plus the lists behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryOverview {
    pub summary: DashboardSummary,
    pub inventory_value: f64,
    pub low_stock: Vec<Product>,
    pub top_products: Vec<Product>,
    #[serde(flatten)]
    pub sales: SalesFigures,
    pub recent_sales: Vec<SalesOrder>,
}

/// Reads store snapshots and aggregates them. Nothing is cached; every
/// call hits the stores.
#[derive(Clone)]
pub struct DashboardService {
    products: Arc<dyn RecordStore<Product>>,
    sales_orders: Arc<dyn RecordStore<SalesOrder>>,
    policy: LowStockPolicy,
}

impl DashboardService {
    pub fn new(
        products: Arc<dyn RecordStore<Product>>,
        sales_orders: Arc<dyn RecordStore<SalesOrder>>,
        policy: LowStockPolicy,
    ) -> Self {
        Self {
            products,
            sales_orders,
            policy,
        }
    }

    pub fn policy(&self) -> LowStockPolicy {
        self.policy
    }

    #[instrument(skip(self), err)]
    pub async fn summary(&self) -> Result<DashboardSummary, StoreError> {
        let products = self.products.find_all().await?;
        Ok(summarize(&products, self.policy))
    }

    #[instrument(skip(self), err)]
    pub async fn low_stock(&self) -> Result<Vec<Product>, StoreError> {
        let products = self.products.find_all().await?;
        Ok(low_stock(&products, self.policy).into_iter().cloned().collect())
    }

    #[instrument(skip(self), err)]
    pub async fn overview(&self) -> Result<InventoryOverview, StoreError> {
        let products = self.products.find_all().await?;
        let orders = self.sales_orders.find_all().await?;
        Ok(InventoryOverview {
            summary: summarize(&products, self.policy),
            inventory_value: inventory_value(&products),
            low_stock: low_stock(&products, self.policy).into_iter().cloned().collect(),
            top_products: top_by_stock_value(&products, TOP_PRODUCTS)
                .into_iter()
                .cloned()
                .collect(),
            sales: sales_figures(&orders),
            recent_sales: recent_sales(&orders, RECENT_SALES)
                .into_iter()
                .cloned()
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stockly_products::NewProduct;
    use stockly_sales::{NewSalesOrder, SalesOrderStatus};

    use crate::store::InMemoryRecordStore;

    fn service(threshold: i32) -> (Arc<InMemoryRecordStore<Product>>, DashboardService) {
        let (store, _orders, svc) = service_with_orders(threshold);
        (store, svc)
    }

    fn service_with_orders(
        threshold: i32,
    ) -> (
        Arc<InMemoryRecordStore<Product>>,
        Arc<InMemoryRecordStore<SalesOrder>>,
        DashboardService,
    ) {
        let store = Arc::new(InMemoryRecordStore::<Product>::new());
        let orders = Arc::new(InMemoryRecordStore::<SalesOrder>::new());
        let svc = DashboardService::new(
            store.clone(),
            orders.clone(),
            LowStockPolicy::new(threshold),
        );
        (store, orders, svc)
    }

    #[tokio::test]
    async fn summary_of_empty_store_is_zero() {
        let (_store, svc) = service(5);
        assert_eq!(svc.summary().await.unwrap(), DashboardSummary::default());
    }

    #[tokio::test]
    async fn summary_reflects_later_writes() {
        let (store, svc) = service(5);
        store
            .create(NewProduct::new("Cable", "Accessories", 10.0, 25.0, 2))
            .await
            .unwrap();
        assert_eq!(svc.summary().await.unwrap(), DashboardSummary::new(1, 1, 25.0));

        store
            .create(NewProduct::new("Desk", "Furniture", 900.0, 1500.0, 20))
            .await
            .unwrap();
        assert_eq!(svc.summary().await.unwrap(), DashboardSummary::new(2, 1, 1525.0));
    }

    #[tokio::test]
    async fn overview_lists_low_stock_and_top_products() {
        let (store, svc) = service(3);
        for (name, price, qty) in [("a", 10.0, 1), ("b", 100.0, 10), ("c", 5.0, 3)] {
            store
                .create(NewProduct::new(name, "x", 1.0, price, qty))
                .await
                .unwrap();
        }

        let o = svc.overview().await.unwrap();
        assert_eq!(o.summary, DashboardSummary::new(3, 2, 115.0));
        assert_eq!(o.inventory_value, 10.0 + 1000.0 + 15.0);
        let low: Vec<_> = o.low_stock.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(low, vec!["a", "c"]);
        assert_eq!(o.top_products[0].name, "b");
        assert_eq!(o.top_products.len(), 3);
    }

    #[tokio::test]
    async fn overview_without_orders_reports_zero_sales() {
        let (_store, svc) = service(5);
        let o = svc.overview().await.unwrap();
        assert_eq!(o.sales, SalesFigures::default());
        assert!(o.recent_sales.is_empty());
    }

    #[tokio::test]
    async fn overview_derives_sales_figures_from_orders() {
        let (_store, orders, svc) = service_with_orders(5);
        for (day, amount) in (1..=6).zip([1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 6001.0]) {
            orders
                .create(NewSalesOrder {
                    invoice_number: format!("INV-{day:04}"),
                    customer_name: "Walk-in".to_string(),
                    amount,
                    status: SalesOrderStatus::Pending,
                    created_at: Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0).unwrap(),
                })
                .await
                .unwrap();
        }

        let o = svc.overview().await.unwrap();
        assert_eq!(o.sales.total_orders, 6);
        assert_eq!(o.sales.sales_revenue, 21001.0);
        assert_eq!(o.sales.avg_order_value, 3500.0);
        let invoices: Vec<_> = o.recent_sales.iter().map(|s| s.invoice_number.as_str()).collect();
        assert_eq!(invoices, vec!["INV-0006", "INV-0005", "INV-0004", "INV-0003", "INV-0002"]);

        // Sales never leak into the product summary.
        assert_eq!(o.summary, DashboardSummary::default());

        let json = serde_json::to_value(&o).unwrap();
        assert_eq!(json["totalOrders"], 6);
        assert_eq!(json["avgOrderValue"], 3500.0);
        assert_eq!(json["recentSales"].as_array().unwrap().len(), 5);
    }
}
