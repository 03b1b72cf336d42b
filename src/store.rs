//! Record Store Module
//!
//! In-memory tables standing in for the relational store behind the cache.
//! Every read here is what the cache exists to avoid.

use std::collections::BTreeMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{LibraryError, Result};

// == Record Trait ==
/// A row type the store can hold.
pub trait Record: Clone + Send + Sync {
    /// Human-readable kind, used in error messages.
    const KIND: &'static str;

    fn id(&self) -> u64;

    fn set_id(&mut self, id: u64);

    /// Copies the mutable fields of `update` onto `self`.
    fn apply_update(&mut self, update: Self);
}

#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<u64, T>,
    next_id: u64,
}

// == Record Store ==
/// One table of records with auto-increment ids starting at 1.
#[derive(Debug)]
pub struct RecordStore<T> {
    table: RwLock<Table<T>>,
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// All records ordered by id.
    pub async fn list(&self) -> Vec<T> {
        let table = self.table.read().await;
        debug!(kind = T::KIND, "Store LIST");
        table.rows.values().cloned().collect()
    }

    pub async fn get(&self, id: u64) -> Result<T> {
        let table = self.table.read().await;
        debug!(kind = T::KIND, id, "Store GET");
        table.rows.get(&id).cloned().ok_or_else(|| not_found::<T>(id))
    }

    /// Stores `record` under a fresh id and returns the saved copy.
    pub async fn insert(&self, mut record: T) -> T {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        record.set_id(id);
        table.rows.insert(record.id(), record.clone());
        debug!(kind = T::KIND, id = record.id(), "Store INSERT");
        record
    }

    pub async fn update(&self, id: u64, update: T) -> Result<T> {
        let mut table = self.table.write().await;
        let record = table.rows.get_mut(&id).ok_or_else(|| not_found::<T>(id))?;

        record.apply_update(update);
        debug!(kind = T::KIND, id, "Store UPDATE");
        Ok(record.clone())
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).ok_or_else(|| not_found::<T>(id))?;
        debug!(kind = T::KIND, id, "Store DELETE");
        Ok(())
    }

    /// Removes every record and returns how many were dropped. Ids keep
    /// counting up from where they were.
    pub async fn delete_all(&self) -> usize {
        let mut table = self.table.write().await;
        let count = table.rows.len();
        table.rows.clear();
        debug!(kind = T::KIND, count, "Store DELETE ALL");
        count
    }
}

fn not_found<T: Record>(id: u64) -> LibraryError {
    LibraryError::NotFound(format!("{} {}", T::KIND, id))
}
