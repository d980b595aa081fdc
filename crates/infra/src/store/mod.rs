//! Record storage boundary.
//!
//! One capability set (create, find by id, find all, update, delete, count)
//! for every entity type, with an in-memory adapter for tests/dev and
//! Postgres adapters for deployments. `relations` layers the foreign-key
//! rules of the schema over the in-memory stores.

pub mod in_memory;
pub mod postgres;
pub mod relations;
pub mod r#trait;

pub use in_memory::InMemoryRecordStore;
pub use postgres::{PostgresProductStore, PostgresSalesItemStore, PostgresSalesOrderStore};
pub use relations::{CascadingOrderStore, CheckedItemStore, GuardedProductStore};
pub use r#trait::{RecordStore, StoreError};
