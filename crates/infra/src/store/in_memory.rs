use std::collections::BTreeMap;
use std::sync::RwLock;

use stockly_core::{Entity, RecordId};

use super::r#trait::{RecordStore, StoreError};

#[derive(Debug)]
struct Table<E> {
    next_id: i64,
    rows: BTreeMap<i64, E>,
}

/// In-memory record store.
///
/// Intended for tests/dev. Ids start at 1 and are never reused, even after
/// a delete.
#[derive(Debug)]
pub struct InMemoryRecordStore<E> {
    table: RwLock<Table<E>>,
}

impl<E> InMemoryRecordStore<E> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl<E> Default for InMemoryRecordStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("lock poisoned".to_string())
}

#[async_trait::async_trait]
impl<E: Entity> RecordStore<E> for InMemoryRecordStore<E> {
    async fn create(&self, draft: E::Draft) -> Result<E, StoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        let id = table.next_id;
        table.next_id += 1;

        let record = E::from_draft(E::Id::from_raw(id), draft);
        table.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn create_all(&self, drafts: Vec<E::Draft>) -> Result<Vec<E>, StoreError> {
        // One write guard for the whole batch; nothing can fail once it is held.
        let mut table = self.table.write().map_err(|_| poisoned())?;
        let mut created = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let id = table.next_id;
            table.next_id += 1;

            let record = E::from_draft(E::Id::from_raw(id), draft);
            table.rows.insert(id, record.clone());
            created.push(record);
        }
        Ok(created)
    }

    async fn find_by_id(&self, id: E::Id) -> Result<Option<E>, StoreError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.get(&id.get()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<E>, StoreError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn update(&self, entity: E) -> Result<E, StoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        match table.rows.get_mut(&entity.id().get()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(StoreError::not_found::<E>(entity.id())),
        }
    }

    async fn delete(&self, id: E::Id) -> Result<(), StoreError> {
        let mut table = self.table.write().map_err(|_| poisoned())?;
        table
            .rows
            .remove(&id.get())
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found::<E>(id))
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.len() as u64)
    }
}
