//! Dashboard summary value.

use serde::{Deserialize, Serialize};

use stockly_core::ValueObject;

/// Totals shown on the dashboard.
///
/// Computed per request from the product store and never persisted. The
/// serialized field names (`totalProducts`, `lowStockCount`, `totalRevenue`)
/// are part of the presentation contract.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    total_products: u64,
    low_stock_count: u64,
    total_revenue: f64,
}

impl DashboardSummary {
    pub fn new(total_products: u64, low_stock_count: u64, total_revenue: f64) -> Self {
        Self {
            total_products,
            low_stock_count,
            total_revenue,
        }
    }

    pub fn total_products(&self) -> u64 {
        self.total_products
    }

    pub fn low_stock_count(&self) -> u64 {
        self.low_stock_count
    }

    pub fn total_revenue(&self) -> f64 {
        self.total_revenue
    }

    pub fn set_total_products(&mut self, total_products: u64) {
        self.total_products = total_products;
    }

    pub fn set_low_stock_count(&mut self, low_stock_count: u64) {
        self.low_stock_count = low_stock_count;
    }

    pub fn set_total_revenue(&mut self, total_revenue: f64) {
        self.total_revenue = total_revenue;
    }
}

impl ValueObject for DashboardSummary {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructed_values() {
        let s = DashboardSummary::new(4, 1, 99699.0);
        assert_eq!(s.total_products(), 4);
        assert_eq!(s.low_stock_count(), 1);
        assert_eq!(s.total_revenue(), 99699.0);
    }

    #[test]
    fn default_is_all_zero_and_setters_overwrite() {
        let mut s = DashboardSummary::default();
        assert_eq!(s, DashboardSummary::new(0, 0, 0.0));

        s.set_total_products(10);
        s.set_low_stock_count(3);
        s.set_total_revenue(1250.5);
        assert_eq!(s, DashboardSummary::new(10, 3, 1250.5));
    }

    #[test]
    fn json_round_trip_keeps_all_fields() {
        let s = DashboardSummary::new(4, 1, 99699.0);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(
            json,
            r#"{"totalProducts":4,"lowStockCount":1,"totalRevenue":99699.0}"#
        );

        let back: DashboardSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn deserializes_integral_revenue_without_decimal_point() {
        let s: DashboardSummary =
            serde_json::from_str(r#"{"totalProducts":2,"lowStockCount":0,"totalRevenue":150}"#)
                .unwrap();
        assert_eq!(s.total_revenue(), 150.0);
    }
}
