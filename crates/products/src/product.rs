use serde::{Deserialize, Serialize};

use stockly_core::{Entity, record_id};

record_id!(
    /// Product identifier (assigned by the store).
    ProductId,
    "ProductId"
);

/// Product fields as supplied on creation or full update.
///
/// Prices and quantity are taken as given; negative values are not rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub cost_price: f64,
    pub selling_price: f64,
    pub quantity: i32,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        cost_price: f64,
        selling_price: f64,
        quantity: i32,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            cost_price,
            selling_price,
            quantity,
        }
    }
}

/// A stocked product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub cost_price: f64,
    pub selling_price: f64,
    pub quantity: i32,
}

impl Product {
    /// Selling price minus cost price, per unit.
    pub fn unit_margin(&self) -> f64 {
        self.selling_price - self.cost_price
    }

    /// Value of the stock on hand at selling price.
    pub fn stock_value(&self) -> f64 {
        self.selling_price * f64::from(self.quantity)
    }
}

impl Entity for Product {
    type Id = ProductId;
    type Draft = NewProduct;

    const NAME: &'static str = "product";

    fn id(&self) -> ProductId {
        self.id
    }

    fn from_draft(id: ProductId, draft: NewProduct) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            cost_price: draft.cost_price,
            selling_price: draft.selling_price,
            quantity: draft.quantity,
        }
    }

    fn into_draft(self) -> NewProduct {
        NewProduct {
            name: self.name,
            category: self.category,
            cost_price: self.cost_price,
            selling_price: self.selling_price,
            quantity: self.quantity,
        }
    }
}
