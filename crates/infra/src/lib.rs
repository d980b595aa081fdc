//! Infrastructure layer: record stores, database wiring, configuration,
//! startup seeding and dashboard reporting.

pub mod config;
pub mod db;
pub mod reporting;
pub mod seed;
pub mod store;

mod integration_tests;

pub use crate::config::{AppConfig, ConfigError};
pub use reporting::{DashboardService, InventoryOverview};
pub use seed::{SeedOutcome, demo_products, seed_products};
pub use store::{InMemoryRecordStore, RecordStore, StoreError};
