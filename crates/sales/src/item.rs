use serde::{Deserialize, Serialize};

use stockly_core::{Entity, record_id};
use stockly_products::ProductId;

use crate::order::SalesOrderId;

record_id!(
    /// Sales line item identifier (assigned by the store).
    SalesItemId,
    "SalesItemId"
);

/// Line item fields as supplied on creation or full update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSalesItem {
    pub order_id: SalesOrderId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub unit_price: f64,
}

/// One line of a sales order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesItem {
    pub id: SalesItemId,
    pub order_id: SalesOrderId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub unit_price: f64,
}

impl SalesItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

impl Entity for SalesItem {
    type Id = SalesItemId;
    type Draft = NewSalesItem;

    const NAME: &'static str = "sales_item";

    fn id(&self) -> SalesItemId {
        self.id
    }

    fn from_draft(id: SalesItemId, draft: NewSalesItem) -> Self {
        Self {
            id,
            order_id: draft.order_id,
            product_id: draft.product_id,
            quantity: draft.quantity,
            unit_price: draft.unit_price,
        }
    }

    fn into_draft(self) -> NewSalesItem {
        NewSalesItem {
            order_id: self.order_id,
            product_id: self.product_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_multiplies_quantity_and_price() {
        let item = SalesItem::from_draft(
            SalesItemId::new(1),
            NewSalesItem {
                order_id: SalesOrderId::new(4),
                product_id: ProductId::new(2),
                quantity: 3,
                unit_price: 4200.0,
            },
        );
        assert_eq!(item.line_total(), 12600.0);
    }

    #[test]
    fn item_json_references_order_and_product_by_number() {
        let v = serde_json::json!({
            "orderId": 4,
            "productId": 2,
            "quantity": 1,
            "unitPrice": 55000.0
        });
        let draft: NewSalesItem = serde_json::from_value(v).unwrap();
        assert_eq!(draft.order_id, SalesOrderId::new(4));
        assert_eq!(draft.product_id, ProductId::new(2));
    }
}
