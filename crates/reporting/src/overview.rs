//! Aggregations over product and sales order snapshots.

use serde::Serialize;

use stockly_products::Product;
use stockly_sales::SalesOrder;

use crate::policy::LowStockPolicy;
use crate::summary::DashboardSummary;

/// Build the dashboard summary for a product snapshot.
///
/// `total_revenue` is the sum of selling prices across the catalog.
pub fn summarize<'a, I>(products: I, policy: LowStockPolicy) -> DashboardSummary
where
    I: IntoIterator<Item = &'a Product>,
{
    let (mut total, mut low, mut revenue) = (0u64, 0u64, 0.0f64);
    for p in products {
        total += 1;
        if policy.is_low(p) {
            low += 1;
        }
        revenue += p.selling_price;
    }
    DashboardSummary::new(total, low, revenue)
}

/// Products at or below the reorder threshold, lowest quantity first.
pub fn low_stock<'a, I>(products: I, policy: LowStockPolicy) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut low: Vec<&Product> = products.into_iter().filter(|p| policy.is_low(p)).collect();
    low.sort_by_key(|p| (p.quantity, p.id));
    low
}

/// Stock on hand valued at selling price.
pub fn inventory_value<'a, I>(products: I) -> f64
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().map(Product::stock_value).sum()
}

/// The `n` products holding the most stock value, highest first.
///
/// Ties keep id order.
pub fn top_by_stock_value<'a, I>(products: I, n: usize) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut ranked: Vec<&Product> = products.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.stock_value()
            .total_cmp(&a.stock_value())
            .then_with(|| a.id.cmp(&b.id))
    });
    ranked.truncate(n);
    ranked
}

/// Figures derived from the sales order register.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesFigures {
    pub total_orders: u64,
    /// Sum of order amounts.
    pub sales_revenue: f64,
    /// Revenue per order rounded to a whole unit; 0 without orders.
    pub avg_order_value: f64,
}

pub fn sales_figures<'a, I>(orders: I) -> SalesFigures
where
    I: IntoIterator<Item = &'a SalesOrder>,
{
    let (mut total, mut revenue) = (0u64, 0.0f64);
    for o in orders {
        total += 1;
        revenue += o.amount;
    }
    let avg = if total == 0 {
        0.0
    } else {
        (revenue / total as f64).round()
    };
    SalesFigures {
        total_orders: total,
        sales_revenue: revenue,
        avg_order_value: avg,
    }
}

/// The `n` most recent orders, newest first. Orders created at the same
/// instant are ordered by descending id.
pub fn recent_sales<'a, I>(orders: I, n: usize) -> Vec<&'a SalesOrder>
where
    I: IntoIterator<Item = &'a SalesOrder>,
{
    let mut recent: Vec<&SalesOrder> = orders.into_iter().collect();
    recent.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    recent.truncate(n);
    recent
}
