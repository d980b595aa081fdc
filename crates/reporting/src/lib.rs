//! Dashboard reporting over product and sales order records.
//!
//! Pure functions and value types only; fetching the records is the caller's
//! job (see `stockly-infra::reporting`).

pub mod overview;
pub mod policy;
pub mod summary;

pub use overview::{
    SalesFigures, inventory_value, low_stock, recent_sales, sales_figures, summarize,
    top_by_stock_value,
};
pub use policy::LowStockPolicy;
pub use summary::DashboardSummary;
