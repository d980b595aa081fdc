//! Sales domain module: order headers and their line items.
//!
//! Records only; storage access is a plain pass-through in `stockly-infra`.

pub mod item;
pub mod order;

pub use item::{NewSalesItem, SalesItem, SalesItemId};
pub use order::{NewSalesOrder, SalesOrder, SalesOrderId, SalesOrderStatus};
