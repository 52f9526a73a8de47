//! In-memory record storage.
//!
//! A [`MemoryStore`] keeps one collection in insertion order and hands out
//! identifiers from a monotonic counter, so an id is never reused even after
//! its record is deleted.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StoreError;
use crate::resources::{RecordId, Resource};

/// A store shared between request handlers.
pub type SharedStore<R> = Arc<RwLock<MemoryStore<R>>>;

/// Ordered, id-keyed collection of records.
#[derive(Debug, Clone)]
pub struct MemoryStore<R> {
    records: Vec<R>,
    next_id: u64,
}

impl<R: Resource> MemoryStore<R> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store pre-populated from `seed`, in order.
    pub fn seeded(seed: impl IntoIterator<Item = R::Fields>) -> Self {
        let mut store = Self::new();
        for fields in seed {
            store.create(fields);
        }
        store
    }

    /// Wrap the store for sharing with handlers.
    pub fn into_shared(self) -> SharedStore<R> {
        Arc::new(RwLock::new(self))
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[R] {
        &self.records
    }

    /// Look up a single record.
    pub fn get(&self, id: RecordId) -> Result<&R, StoreError> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .ok_or(StoreError::NotFound { kind: R::KIND, id })
    }

    /// Assign the next id, append the record and return it.
    pub fn create(&mut self, fields: R::Fields) -> R {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;

        let record = R::from_fields(id, fields);
        self.records.push(record.clone());
        debug!(kind = %R::KIND, %id, "record created");
        record
    }

    /// Replace every non-id field of the record with `id`.
    pub fn update(&mut self, id: RecordId, fields: R::Fields) -> Result<R, StoreError> {
        let index = self.position(id)?;
        let record = &mut self.records[index];
        record.replace(fields);
        debug!(kind = %R::KIND, %id, "record updated");
        Ok(record.clone())
    }

    /// Remove the record with `id`.
    pub fn delete(&mut self, id: RecordId) -> Result<(), StoreError> {
        let index = self.position(id)?;
        self.records.remove(index);
        debug!(kind = %R::KIND, %id, "record deleted");
        Ok(())
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: RecordId) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StoreError::NotFound { kind: R::KIND, id })
    }
}

impl<R: Resource> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
