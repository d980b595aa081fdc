use std::sync::Arc;

use thiserror::Error;

use stockly_core::{Entity, RecordId};

/// Errors surfaced by record stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record with the given id exists.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// The backing store could not be reached or failed mid-operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The write was rejected by a storage constraint (e.g. a dangling reference).
    #[error("constraint violated: {0}")]
    Constraint(String),

    /// A stored row could not be mapped back into a record.
    #[error("failed to decode record: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn not_found<E: Entity>(id: E::Id) -> Self {
        Self::NotFound {
            entity: E::NAME,
            id: id.get(),
        }
    }
}

/// Storage access for one entity type.
///
/// Pure delegation: no filtering or validation is layered on top. What is
/// written is what is read back, keyed by the id the store assigned.
#[async_trait::async_trait]
pub trait RecordStore<E: Entity>: Send + Sync {
    /// Persist a new record and return it with its assigned id.
    async fn create(&self, draft: E::Draft) -> Result<E, StoreError>;

    /// Persist a batch of new records as one unit: either every draft is
    /// stored, or none is. Records come back in draft order.
    async fn create_all(&self, drafts: Vec<E::Draft>) -> Result<Vec<E>, StoreError>;

    async fn find_by_id(&self, id: E::Id) -> Result<Option<E>, StoreError>;

    /// All records, ordered by id.
    async fn find_all(&self) -> Result<Vec<E>, StoreError>;

    /// Overwrite an existing record. Fails with `NotFound` if the id is unknown.
    async fn update(&self, entity: E) -> Result<E, StoreError>;

    /// Remove a record. Fails with `NotFound` if the id is unknown.
    async fn delete(&self, id: E::Id) -> Result<(), StoreError>;

    async fn count(&self) -> Result<u64, StoreError>;

    /// Like `find_by_id`, but a missing record is an error.
    async fn get(&self, id: E::Id) -> Result<E, StoreError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| StoreError::not_found::<E>(id))
    }
}

#[async_trait::async_trait]
impl<E, S> RecordStore<E> for Arc<S>
where
    E: Entity,
    S: RecordStore<E> + ?Sized,
{
    async fn create(&self, draft: E::Draft) -> Result<E, StoreError> {
        (**self).create(draft).await
    }

    async fn create_all(&self, drafts: Vec<E::Draft>) -> Result<Vec<E>, StoreError> {
        (**self).create_all(drafts).await
    }

    async fn find_by_id(&self, id: E::Id) -> Result<Option<E>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<E>, StoreError> {
        (**self).find_all().await
    }

    async fn update(&self, entity: E) -> Result<E, StoreError> {
        (**self).update(entity).await
    }

    async fn delete(&self, id: E::Id) -> Result<(), StoreError> {
        (**self).delete(id).await
    }

    async fn count(&self) -> Result<u64, StoreError> {
        (**self).count().await
    }
}
