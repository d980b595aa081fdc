//! Integration tests for the startup pipeline.
//!
//! Tests: Config → Seeder → RecordStore → DashboardService
//!
//! Verifies:
//! - A fresh store is seeded and summarized with the configured threshold
//! - A restart against a populated store does not duplicate data
//! - Sales records round-trip through type-erased stores

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use stockly_core::Entity;
    use stockly_products::Product;
    use stockly_reporting::DashboardSummary;
    use stockly_sales::{NewSalesItem, NewSalesOrder, SalesItem, SalesOrder, SalesOrderStatus};

    use crate::config::AppConfig;
    use crate::reporting::DashboardService;
    use crate::seed::{SeedOutcome, seed_products};
    use crate::store::{InMemoryRecordStore, RecordStore};

    fn test_config() -> AppConfig {
        AppConfig::from_toml_str(
            r#"
            [server]
            port = 0

            [reporting]
            low_stock_threshold = 5
            "#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn fresh_start_seeds_and_summarizes_demo_catalog() {
        let cfg = test_config();
        let products: Arc<dyn RecordStore<Product>> = Arc::new(InMemoryRecordStore::<Product>::new());

        let outcome = seed_products(products.as_ref()).await.unwrap();
        assert_eq!(outcome, SeedOutcome::Seeded { inserted: 4 });

        let orders: Arc<dyn RecordStore<SalesOrder>> =
            Arc::new(InMemoryRecordStore::<SalesOrder>::new());
        let dashboard =
            DashboardService::new(products.clone(), orders, cfg.reporting.low_stock_policy());
        let summary = dashboard.summary().await.unwrap();
        assert_eq!(summary, DashboardSummary::new(4, 1, 99699.0));

        let low = dashboard.low_stock().await.unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "HP Laser Printer");
    }

    #[tokio::test]
    async fn restart_with_populated_store_keeps_data_intact() {
        let products: Arc<dyn RecordStore<Product>> = Arc::new(InMemoryRecordStore::<Product>::new());

        seed_products(products.as_ref()).await.unwrap();
        let snapshot = products.find_all().await.unwrap();

        // Simulated process restart: same store, seeder runs again.
        let outcome = seed_products(products.as_ref()).await.unwrap();
        assert_eq!(outcome, SeedOutcome::Skipped { existing: 4 });
        assert_eq!(products.find_all().await.unwrap(), snapshot);
    }

    #[tokio::test]
    async fn sales_records_round_trip_through_type_erased_stores() {
        let orders: Arc<dyn RecordStore<SalesOrder>> =
            Arc::new(InMemoryRecordStore::<SalesOrder>::new());
        let items: Arc<dyn RecordStore<SalesItem>> =
            Arc::new(InMemoryRecordStore::<SalesItem>::new());
        let products: Arc<dyn RecordStore<Product>> =
            Arc::new(InMemoryRecordStore::<Product>::new());
        seed_products(products.as_ref()).await.unwrap();
        let laptop = products.find_all().await.unwrap().remove(0);

        let order = orders
            .create(NewSalesOrder {
                invoice_number: "INV-2001".to_string(),
                customer_name: "Northwind".to_string(),
                amount: 110000.0,
                status: SalesOrderStatus::Pending,
                created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            })
            .await
            .unwrap();
        let item = items
            .create(NewSalesItem {
                order_id: order.id(),
                product_id: laptop.id(),
                quantity: 2,
                unit_price: laptop.selling_price,
            })
            .await
            .unwrap();

        assert_eq!(orders.get(order.id()).await.unwrap(), order);
        assert_eq!(items.get(item.id()).await.unwrap().line_total(), order.amount);

        let mut paid = order.clone();
        paid.status = SalesOrderStatus::Paid;
        orders.update(paid.clone()).await.unwrap();
        assert!(orders.get(order.id()).await.unwrap().is_paid());

        items.delete(item.id()).await.unwrap();
        assert_eq!(items.count().await.unwrap(), 0);
        assert_eq!(orders.count().await.unwrap(), 1);
    }
}
