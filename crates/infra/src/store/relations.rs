//! Cross-table rules for stores without a schema of their own.
//!
//! The Postgres tables enforce these with foreign keys:
//! - an item must point at an existing order and product (`Constraint`)
//! - deleting an order deletes its items
//! - a product referenced by an item cannot be deleted (`Constraint`)
//!
//! The wrappers here give the in-memory stores the same behavior. Checks
//! and writes are separate calls, so they are not atomic with respect to
//! concurrent writers.

use std::sync::Arc;

use tracing::debug;

use stockly_products::{NewProduct, Product, ProductId};
use stockly_sales::{
    NewSalesItem, NewSalesOrder, SalesItem, SalesItemId, SalesOrder, SalesOrderId,
};

use super::r#trait::{RecordStore, StoreError};

/// Sales order store that removes an order's items along with the order.
pub struct CascadingOrderStore {
    orders: Arc<dyn RecordStore<SalesOrder>>,
    items: Arc<dyn RecordStore<SalesItem>>,
}

impl CascadingOrderStore {
    pub fn new(
        orders: Arc<dyn RecordStore<SalesOrder>>,
        items: Arc<dyn RecordStore<SalesItem>>,
    ) -> Self {
        Self { orders, items }
    }
}

#[async_trait::async_trait]
impl RecordStore<SalesOrder> for CascadingOrderStore {
    async fn create(&self, draft: NewSalesOrder) -> Result<SalesOrder, StoreError> {
        self.orders.create(draft).await
    }

    async fn create_all(&self, drafts: Vec<NewSalesOrder>) -> Result<Vec<SalesOrder>, StoreError> {
        self.orders.create_all(drafts).await
    }

    async fn find_by_id(&self, id: SalesOrderId) -> Result<Option<SalesOrder>, StoreError> {
        self.orders.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<SalesOrder>, StoreError> {
        self.orders.find_all().await
    }

    async fn update(&self, entity: SalesOrder) -> Result<SalesOrder, StoreError> {
        self.orders.update(entity).await
    }

    async fn delete(&self, id: SalesOrderId) -> Result<(), StoreError> {
        self.orders.delete(id).await?;

        let mut removed = 0usize;
        for item in self.items.find_all().await? {
            if item.order_id == id {
                self.items.delete(item.id).await?;
                removed += 1;
            }
        }
        debug!(order_id = %id, removed, "removed items of deleted order");
        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.orders.count().await
    }
}

/// Sales item store that rejects items pointing at a missing order or
/// product.
pub struct CheckedItemStore {
    items: Arc<dyn RecordStore<SalesItem>>,
    orders: Arc<dyn RecordStore<SalesOrder>>,
    products: Arc<dyn RecordStore<Product>>,
}

impl CheckedItemStore {
    pub fn new(
        items: Arc<dyn RecordStore<SalesItem>>,
        orders: Arc<dyn RecordStore<SalesOrder>>,
        products: Arc<dyn RecordStore<Product>>,
    ) -> Self {
        Self {
            items,
            orders,
            products,
        }
    }

    async fn check_refs(
        &self,
        order_id: SalesOrderId,
        product_id: ProductId,
    ) -> Result<(), StoreError> {
        if self.orders.find_by_id(order_id).await?.is_none() {
            return Err(StoreError::Constraint(format!(
                "sales item references missing sales_order {order_id}"
            )));
        }
        if self.products.find_by_id(product_id).await?.is_none() {
            return Err(StoreError::Constraint(format!(
                "sales item references missing product {product_id}"
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordStore<SalesItem> for CheckedItemStore {
    async fn create(&self, draft: NewSalesItem) -> Result<SalesItem, StoreError> {
        self.check_refs(draft.order_id, draft.product_id).await?;
        self.items.create(draft).await
    }

    async fn create_all(&self, drafts: Vec<NewSalesItem>) -> Result<Vec<SalesItem>, StoreError> {
        for draft in &drafts {
            self.check_refs(draft.order_id, draft.product_id).await?;
        }
        self.items.create_all(drafts).await
    }

    async fn find_by_id(&self, id: SalesItemId) -> Result<Option<SalesItem>, StoreError> {
        self.items.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<SalesItem>, StoreError> {
        self.items.find_all().await
    }

    async fn update(&self, entity: SalesItem) -> Result<SalesItem, StoreError> {
        self.check_refs(entity.order_id, entity.product_id).await?;
        self.items.update(entity).await
    }

    async fn delete(&self, id: SalesItemId) -> Result<(), StoreError> {
        self.items.delete(id).await
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.items.count().await
    }
}

/// Product store that refuses to delete a product still sold on an item.
pub struct GuardedProductStore {
    products: Arc<dyn RecordStore<Product>>,
    items: Arc<dyn RecordStore<SalesItem>>,
}

impl GuardedProductStore {
    pub fn new(
        products: Arc<dyn RecordStore<Product>>,
        items: Arc<dyn RecordStore<SalesItem>>,
    ) -> Self {
        Self { products, items }
    }
}

#[async_trait::async_trait]
impl RecordStore<Product> for GuardedProductStore {
    async fn create(&self, draft: NewProduct) -> Result<Product, StoreError> {
        self.products.create(draft).await
    }

    async fn create_all(&self, drafts: Vec<NewProduct>) -> Result<Vec<Product>, StoreError> {
        self.products.create_all(drafts).await
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.products.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        self.products.find_all().await
    }

    async fn update(&self, entity: Product) -> Result<Product, StoreError> {
        self.products.update(entity).await
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let referenced = self
            .items
            .find_all()
            .await?
            .iter()
            .any(|item| item.product_id == id);
        if referenced {
            return Err(StoreError::Constraint(format!(
                "product {id} is referenced by a sales item"
            )));
        }
        self.products.delete(id).await
    }

    async fn count(&self) -> Result<u64, StoreError> {
        self.products.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use stockly_sales::SalesOrderStatus;

    use crate::store::InMemoryRecordStore;

    struct Stores {
        products: Arc<dyn RecordStore<Product>>,
        orders: Arc<dyn RecordStore<SalesOrder>>,
        items: Arc<dyn RecordStore<SalesItem>>,
    }

    fn stores() -> Stores {
        let raw_products: Arc<dyn RecordStore<Product>> =
            Arc::new(InMemoryRecordStore::<Product>::new());
        let raw_orders: Arc<dyn RecordStore<SalesOrder>> =
            Arc::new(InMemoryRecordStore::<SalesOrder>::new());
        let raw_items: Arc<dyn RecordStore<SalesItem>> =
            Arc::new(InMemoryRecordStore::<SalesItem>::new());
        Stores {
            products: Arc::new(GuardedProductStore::new(raw_products.clone(), raw_items.clone())),
            orders: Arc::new(CascadingOrderStore::new(raw_orders.clone(), raw_items.clone())),
            items: Arc::new(CheckedItemStore::new(raw_items, raw_orders, raw_products)),
        }
    }

    fn new_order(invoice: &str) -> NewSalesOrder {
        NewSalesOrder {
            invoice_number: invoice.to_string(),
            customer_name: "Walk-in".to_string(),
            amount: 4200.0,
            status: SalesOrderStatus::Paid,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
        }
    }

    fn new_item(order_id: SalesOrderId, product_id: ProductId) -> NewSalesItem {
        NewSalesItem {
            order_id,
            product_id,
            quantity: 1,
            unit_price: 4200.0,
        }
    }

    async fn chair(s: &Stores) -> Product {
        s.products
            .create(NewProduct::new("Office Chair (Ergonomic)", "Furniture", 3000.0, 4200.0, 12))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn item_with_missing_order_or_product_is_rejected() {
        let s = stores();
        let product = chair(&s).await;
        let order = s.orders.create(new_order("INV-1")).await.unwrap();

        let err = s
            .items
            .create(new_item(SalesOrderId::new(999), product.id))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));

        let err = s
            .items
            .create(new_item(order.id, ProductId::new(999)))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));

        assert_eq!(s.items.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn batch_with_one_dangling_item_writes_nothing() {
        let s = stores();
        let product = chair(&s).await;
        let order = s.orders.create(new_order("INV-1")).await.unwrap();

        let err = s
            .items
            .create_all(vec![
                new_item(order.id, product.id),
                new_item(SalesOrderId::new(999), product.id),
            ])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));
        assert_eq!(s.items.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn deleting_an_order_removes_only_its_items() {
        let s = stores();
        let product = chair(&s).await;
        let first = s.orders.create(new_order("INV-1")).await.unwrap();
        let second = s.orders.create(new_order("INV-2")).await.unwrap();
        s.items.create(new_item(first.id, product.id)).await.unwrap();
        s.items.create(new_item(first.id, product.id)).await.unwrap();
        let kept = s.items.create(new_item(second.id, product.id)).await.unwrap();

        s.orders.delete(first.id).await.unwrap();

        assert_eq!(s.items.find_all().await.unwrap(), vec![kept]);
        assert!(matches!(
            s.orders.delete(first.id).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn sold_product_cannot_be_deleted() {
        let s = stores();
        let product = chair(&s).await;
        let order = s.orders.create(new_order("INV-1")).await.unwrap();
        s.items.create(new_item(order.id, product.id)).await.unwrap();

        let err = s.products.delete(product.id).await.unwrap_err();
        assert!(matches!(err, StoreError::Constraint(_)));

        s.orders.delete(order.id).await.unwrap();
        s.products.delete(product.id).await.unwrap();
        assert_eq!(s.products.count().await.unwrap(), 0);
    }
}
