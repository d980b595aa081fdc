//! Products domain module.
//!
//! Plain product records (name, category, prices, quantity on hand). No IO,
//! no HTTP, no storage.

pub mod product;

pub use product::{NewProduct, Product, ProductId};
