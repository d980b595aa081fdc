//! Demo data seeding at startup.
//!
//! Runs once, before the server accepts requests. Writes only into an empty
//! product store; a store holding any product is left untouched.

use tracing::{info, instrument};

use stockly_products::{NewProduct, Product};

use crate::store::{RecordStore, StoreError};

/// What a seeding run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and the demo products were inserted.
    Seeded { inserted: usize },
    /// The store already held products; nothing was written.
    Skipped { existing: u64 },
}

/// The fixed demo catalog.
pub fn demo_products() -> Vec<NewProduct> {
    vec![
        NewProduct::new("Dell Inspiron Laptop", "Electronics", 48000.0, 55000.0, 8),
        NewProduct::new("Samsung Galaxy A55", "Mobile", 25000.0, 28999.0, 15),
        NewProduct::new("Office Chair (Ergonomic)", "Furniture", 3000.0, 4200.0, 12),
        NewProduct::new("HP Laser Printer", "Electronics", 9000.0, 11500.0, 5),
    ]
}

/// Insert the demo catalog if, and only if, the product store is empty.
///
/// The catalog is written as one batch, so a failed run leaves the store
/// empty and the next start seeds it again. Any store error is returned
/// as-is; the caller treats it as fatal.
#[instrument(skip_all, err)]
pub async fn seed_products<S>(store: &S) -> Result<SeedOutcome, StoreError>
where
    S: RecordStore<Product> + ?Sized,
{
    let existing = store.count().await?;
    if existing != 0 {
        info!(existing, "product store not empty; skipping demo seed");
        return Ok(SeedOutcome::Skipped { existing });
    }

    let created = store.create_all(demo_products()).await?;
    for product in &created {
        info!(id = %product.id, name = %product.name, "seeded product");
    }

    let inserted = created.len();
    info!(inserted, "demo products seeded");
    Ok(SeedOutcome::Seeded { inserted })
}
