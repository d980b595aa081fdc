use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockly_core::{DomainError, Entity, record_id};

record_id!(
    /// Sales order identifier (assigned by the store).
    SalesOrderId,
    "SalesOrderId"
);

/// Payment status of a sales order.
///
/// Serialized lowercase; parsing (from JSON or text) ignores case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SalesOrderStatus {
    Paid,
    Pending,
}

impl SalesOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalesOrderStatus::Paid => "paid",
            SalesOrderStatus::Pending => "pending",
        }
    }
}

impl core::str::FromStr for SalesOrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paid" => Ok(SalesOrderStatus::Paid),
            "pending" => Ok(SalesOrderStatus::Pending),
            other => Err(DomainError::validation(format!(
                "unknown sales order status: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for SalesOrderStatus {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Order header fields as supplied on creation or full update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSalesOrder {
    pub invoice_number: String,
    pub customer_name: String,
    pub amount: f64,
    pub status: SalesOrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Sales order header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: SalesOrderId,
    pub invoice_number: String,
    pub customer_name: String,
    pub amount: f64,
    pub status: SalesOrderStatus,
    pub created_at: DateTime<Utc>,
}

impl SalesOrder {
    pub fn is_paid(&self) -> bool {
        self.status == SalesOrderStatus::Paid
    }
}

impl Entity for SalesOrder {
    type Id = SalesOrderId;
    type Draft = NewSalesOrder;

    const NAME: &'static str = "sales_order";

    fn id(&self) -> SalesOrderId {
        self.id
    }

    fn from_draft(id: SalesOrderId, draft: NewSalesOrder) -> Self {
        Self {
            id,
            invoice_number: draft.invoice_number,
            customer_name: draft.customer_name,
            amount: draft.amount,
            status: draft.status,
            created_at: draft.created_at,
        }
    }

    fn into_draft(self) -> NewSalesOrder {
        NewSalesOrder {
            invoice_number: self.invoice_number,
            customer_name: self.customer_name,
            amount: self.amount,
            status: self.status,
            created_at: self.created_at,
        }
    }
}
