use serde::{Deserialize, Serialize};

use stockly_products::Product;

/// Reorder threshold deciding which products count as low stock.
///
/// A product is low stock when its quantity on hand is at or below the
/// threshold. The threshold always comes from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockPolicy {
    threshold: i32,
}

impl LowStockPolicy {
    pub fn new(threshold: i32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    pub fn is_low(&self, product: &Product) -> bool {
        product.quantity <= self.threshold
    }
}
