//! Postgres-backed record stores.
//!
//! One thin adapter per entity over the tables created by `migrations/`.
//! Ids come from `BIGSERIAL` columns and are read back with `RETURNING`.
//! `create_all` inserts the whole batch inside one transaction.
//!
//! ## Error Mapping
//!
//! | SQLx Error | StoreError |
//! |------------|------------|
//! | Database, SQLSTATE class `23` (integrity constraint) | `Constraint` |
//! | Database (other) | `Unavailable` |
//! | PoolClosed / PoolTimedOut / Io / Tls / Protocol | `Unavailable` |
//! | ColumnDecode / Decode / ColumnNotFound / TypeNotFound | `Decode` |
//! | Other | `Unavailable` |

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgExecutor, PgPool};
use tracing::instrument;

use stockly_core::{Entity, RecordId};
use stockly_products::{NewProduct, Product, ProductId};
use stockly_sales::{
    NewSalesItem, NewSalesOrder, SalesItem, SalesItemId, SalesOrder, SalesOrderId,
    SalesOrderStatus,
};

use super::r#trait::{RecordStore, StoreError};

pub(crate) fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            let msg = format!("database error in {}: {}", operation, db_err.message());
            match db_err.code().as_deref() {
                Some(code) if code.starts_with("23") => StoreError::Constraint(msg),
                _ => StoreError::Unavailable(msg),
            }
        }
        sqlx::Error::PoolClosed => {
            StoreError::Unavailable(format!("connection pool closed in {}", operation))
        }
        sqlx::Error::PoolTimedOut => {
            StoreError::Unavailable(format!("connection pool timed out in {}", operation))
        }
        e @ (sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::TypeNotFound { .. }) => {
            StoreError::Decode(format!("{} in {}", e, operation))
        }
        other => StoreError::Unavailable(format!("sqlx error in {}: {}", operation, other)),
    }
}

// -------------------------
// Products
// -------------------------

#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    category: String,
    cost_price: f64,
    selling_price: f64,
    quantity: i32,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product::from_draft(
            ProductId::from_raw(row.id),
            NewProduct {
                name: row.name,
                category: row.category,
                cost_price: row.cost_price,
                selling_price: row.selling_price,
                quantity: row.quantity,
            },
        )
    }
}

async fn insert_product<'e, X>(executor: X, draft: &NewProduct) -> Result<ProductRow, sqlx::Error>
where
    X: PgExecutor<'e>,
{
    sqlx::query_as::<_, ProductRow>(
        r#"
        INSERT INTO products (name, category, cost_price, selling_price, quantity)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, category, cost_price, selling_price, quantity
        "#,
    )
    .bind(&draft.name)
    .bind(&draft.category)
    .bind(draft.cost_price)
    .bind(draft.selling_price)
    .bind(draft.quantity)
    .fetch_one(executor)
    .await
}

/// Product store over the `products` table.
#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl RecordStore<Product> for PostgresProductStore {
    #[instrument(skip_all, err)]
    async fn create(&self, draft: NewProduct) -> Result<Product, StoreError> {
        let row = insert_product(&self.pool, &draft)
            .await
            .map_err(|e| map_sqlx_error("create_product", e))?;

        Ok(row.into())
    }

    #[instrument(skip_all, fields(count = drafts.len()), err)]
    async fn create_all(&self, drafts: Vec<NewProduct>) -> Result<Vec<Product>, StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("create_products", e))?;

        let mut created = Vec::with_capacity(drafts.len());
        for draft in &drafts {
            let row = insert_product(&mut *tx, draft)
                .await
                .map_err(|e| map_sqlx_error("create_products", e))?;
            created.push(row.into());
        }

        // Dropping `tx` on an early return rolls the batch back.
        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("create_products", e))?;
        Ok(created)
    }

    #[instrument(skip(self), fields(id = %id), err)]
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, category, cost_price, selling_price, quantity
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_product", e))?;

        Ok(row.map(Product::from))
    }

    #[instrument(skip(self), err)]
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, category, cost_price, selling_price, quantity
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_products", e))?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    #[instrument(skip_all, fields(id = %product.id), err)]
    async fn update(&self, product: Product) -> Result<Product, StoreError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET name = $2, category = $3, cost_price = $4, selling_price = $5, quantity = $6
            WHERE id = $1
            RETURNING id, name, category, cost_price, selling_price, quantity
            "#,
        )
        .bind(product.id.get())
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.cost_price)
        .bind(product.selling_price)
        .bind(product.quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_product", e))?;

        row.map(Product::from)
            .ok_or_else(|| StoreError::not_found::<Product>(product.id))
    }

    #[instrument(skip(self), fields(id = %id), err)]
    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_product", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found::<Product>(id));
        }
        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn count(&self) -> Result<u64, StoreError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("count_products", e))?;

        Ok(total.max(0) as u64)
    }
}

// -------------------------
// Sales orders
// -------------------------

#[derive(Debug, FromRow)]
struct SalesOrderRow {
    id: i64,
    invoice_number: String,
    customer_name: String,
    amount: f64,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<SalesOrderRow> for SalesOrder {
    type Error = StoreError;

    fn try_from(row: SalesOrderRow) -> Result<Self, Self::Error> {
        let status: SalesOrderStatus = row
            .status
            .parse()
            .map_err(|e| StoreError::Decode(format!("sales_orders.status: {e}")))?;

        Ok(SalesOrder::from_draft(
            SalesOrderId::from_raw(row.id),
            NewSalesOrder {
                invoice_number: row.invoice_number,
                customer_name: row.customer_name,
                amount: row.amount,
                status,
                created_at: row.created_at,
            },
        ))
    }
}

async fn insert_sales_order<'e, X>(
    executor: X,
    draft: &NewSalesOrder,
) -> Result<SalesOrderRow, sqlx::Error>
where
    X: PgExecutor<'e>,
{
    sqlx::query_as::<_, SalesOrderRow>(
        r#"
        INSERT INTO sales_orders (invoice_number, customer_name, amount, status, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, invoice_number, customer_name, amount, status, created_at
        "#,
    )
    .bind(&draft.invoice_number)
    .bind(&draft.customer_name)
    .bind(draft.amount)
    .bind(draft.status.as_str())
    .bind(draft.created_at)
    .fetch_one(executor)
    .await
}

/// Sales order store over the `sales_orders` table.
#[derive(Debug, Clone)]
pub struct PostgresSalesOrderStore {
    pool: PgPool,
}

impl PostgresSalesOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl RecordStore<SalesOrder> for PostgresSalesOrderStore {
    #[instrument(skip_all, err)]
    async fn create(&self, draft: NewSalesOrder) -> Result<SalesOrder, StoreError> {
        let row = insert_sales_order(&self.pool, &draft)
            .await
            .map_err(|e| map_sqlx_error("create_sales_order", e))?;

        row.try_into()
    }

    #[instrument(skip_all, fields(count = drafts.len()), err)]
    async fn create_all(
        &self,
        drafts: Vec<NewSalesOrder>,
    ) -> Result<Vec<SalesOrder>, StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("create_sales_orders", e))?;

        let mut created = Vec::with_capacity(drafts.len());
        for draft in &drafts {
            let row = insert_sales_order(&mut *tx, draft)
                .await
                .map_err(|e| map_sqlx_error("create_sales_orders", e))?;
            created.push(row.try_into()?);
        }

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("create_sales_orders", e))?;
        Ok(created)
    }

    #[instrument(skip(self), fields(id = %id), err)]
    async fn find_by_id(&self, id: SalesOrderId) -> Result<Option<SalesOrder>, StoreError> {
        let row = sqlx::query_as::<_, SalesOrderRow>(
            r#"
            SELECT id, invoice_number, customer_name, amount, status, created_at
            FROM sales_orders
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_sales_order", e))?;

        row.map(SalesOrder::try_from).transpose()
    }

    #[instrument(skip(self), err)]
    async fn find_all(&self) -> Result<Vec<SalesOrder>, StoreError> {
        let rows = sqlx::query_as::<_, SalesOrderRow>(
            r#"
            SELECT id, invoice_number, customer_name, amount, status, created_at
            FROM sales_orders
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_sales_orders", e))?;

        rows.into_iter().map(SalesOrder::try_from).collect()
    }

    #[instrument(skip_all, fields(id = %order.id), err)]
    async fn update(&self, order: SalesOrder) -> Result<SalesOrder, StoreError> {
        let row = sqlx::query_as::<_, SalesOrderRow>(
            r#"
            UPDATE sales_orders
            SET invoice_number = $2, customer_name = $3, amount = $4, status = $5, created_at = $6
            WHERE id = $1
            RETURNING id, invoice_number, customer_name, amount, status, created_at
            "#,
        )
        .bind(order.id.get())
        .bind(&order.invoice_number)
        .bind(&order.customer_name)
        .bind(order.amount)
        .bind(order.status.as_str())
        .bind(order.created_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_sales_order", e))?;

        match row {
            Some(row) => row.try_into(),
            None => Err(StoreError::not_found::<SalesOrder>(order.id)),
        }
    }

    #[instrument(skip(self), fields(id = %id), err)]
    async fn delete(&self, id: SalesOrderId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM sales_orders WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_sales_order", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found::<SalesOrder>(id));
        }
        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn count(&self) -> Result<u64, StoreError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales_orders")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("count_sales_orders", e))?;

        Ok(total.max(0) as u64)
    }
}

// -------------------------
// Sales items
// -------------------------

#[derive(Debug, FromRow)]
struct SalesItemRow {
    id: i64,
    order_id: i64,
    product_id: i64,
    quantity: i32,
    unit_price: f64,
}

impl From<SalesItemRow> for SalesItem {
    fn from(row: SalesItemRow) -> Self {
        SalesItem::from_draft(
            SalesItemId::from_raw(row.id),
            NewSalesItem {
                order_id: SalesOrderId::from_raw(row.order_id),
                product_id: ProductId::from_raw(row.product_id),
                quantity: row.quantity,
                unit_price: row.unit_price,
            },
        )
    }
}

async fn insert_sales_item<'e, X>(
    executor: X,
    draft: &NewSalesItem,
) -> Result<SalesItemRow, sqlx::Error>
where
    X: PgExecutor<'e>,
{
    sqlx::query_as::<_, SalesItemRow>(
        r#"
        INSERT INTO sales_items (order_id, product_id, quantity, unit_price)
        VALUES ($1, $2, $3, $4)
        RETURNING id, order_id, product_id, quantity, unit_price
        "#,
    )
    .bind(draft.order_id.get())
    .bind(draft.product_id.get())
    .bind(draft.quantity)
    .bind(draft.unit_price)
    .fetch_one(executor)
    .await
}

/// Sales line item store over the `sales_items` table.
#[derive(Debug, Clone)]
pub struct PostgresSalesItemStore {
    pool: PgPool,
}

impl PostgresSalesItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl RecordStore<SalesItem> for PostgresSalesItemStore {
    #[instrument(skip_all, err)]
    async fn create(&self, draft: NewSalesItem) -> Result<SalesItem, StoreError> {
        let row = insert_sales_item(&self.pool, &draft)
            .await
            .map_err(|e| map_sqlx_error("create_sales_item", e))?;

        Ok(row.into())
    }

    #[instrument(skip_all, fields(count = drafts.len()), err)]
    async fn create_all(&self, drafts: Vec<NewSalesItem>) -> Result<Vec<SalesItem>, StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("create_sales_items", e))?;

        let mut created = Vec::with_capacity(drafts.len());
        for draft in &drafts {
            let row = insert_sales_item(&mut *tx, draft)
                .await
                .map_err(|e| map_sqlx_error("create_sales_items", e))?;
            created.push(row.into());
        }

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("create_sales_items", e))?;
        Ok(created)
    }

    #[instrument(skip(self), fields(id = %id), err)]
    async fn find_by_id(&self, id: SalesItemId) -> Result<Option<SalesItem>, StoreError> {
        let row = sqlx::query_as::<_, SalesItemRow>(
            r#"
            SELECT id, order_id, product_id, quantity, unit_price
            FROM sales_items
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_sales_item", e))?;

        Ok(row.map(SalesItem::from))
    }

    #[instrument(skip(self), err)]
    async fn find_all(&self) -> Result<Vec<SalesItem>, StoreError> {
        let rows = sqlx::query_as::<_, SalesItemRow>(
            r#"
            SELECT id, order_id, product_id, quantity, unit_price
            FROM sales_items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_sales_items", e))?;

        Ok(rows.into_iter().map(SalesItem::from).collect())
    }

    #[instrument(skip_all, fields(id = %item.id), err)]
    async fn update(&self, item: SalesItem) -> Result<SalesItem, StoreError> {
        let row = sqlx::query_as::<_, SalesItemRow>(
            r#"
            UPDATE sales_items
            SET order_id = $2, product_id = $3, quantity = $4, unit_price = $5
            WHERE id = $1
            RETURNING id, order_id, product_id, quantity, unit_price
            "#,
        )
        .bind(item.id.get())
        .bind(item.order_id.get())
        .bind(item.product_id.get())
        .bind(item.quantity)
        .bind(item.unit_price)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_sales_item", e))?;

        row.map(SalesItem::from)
            .ok_or_else(|| StoreError::not_found::<SalesItem>(item.id))
    }

    #[instrument(skip(self), fields(id = %id), err)]
    async fn delete(&self, id: SalesItemId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM sales_items WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_sales_item", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found::<SalesItem>(id));
        }
        Ok(())
    }

    #[instrument(skip(self), err)]
    async fn count(&self) -> Result<u64, StoreError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales_items")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("count_sales_items", e))?;

        Ok(total.max(0) as u64)
    }
}
