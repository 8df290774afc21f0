//! Record store
//!
//! The opaque-record collaborator in front of the index core. Payloads are
//! serialized JSON strings keyed by id; the indexes only ever see the
//! `(id, sort key)` pair and never inspect payload bytes. The sort key is
//! always supplied explicitly by the caller, the store performs no
//! derivation from record content.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};
use crate::index::{IndexConfig, IndexCoordinator, SortedEntry};
use crate::observability::{Logger, Severity};

/// In-memory record store with exact, prefix, and range lookup.
///
/// Insert-only: records are never removed or re-keyed. A record's id is
/// either supplied by the caller (who guarantees uniqueness) or generated
/// as a v4 UUID.
pub struct RecordStore {
    records: HashMap<String, String>,
    indexes: IndexCoordinator,
    logger: Logger,
}

impl RecordStore {
    /// Creates an empty store with the default index configuration
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Creates an empty store with an explicit index configuration
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            records: HashMap::new(),
            indexes: IndexCoordinator::with_config(config),
            logger: Logger::stdout(),
        }
    }

    /// Replaces the logger, e.g. to capture output in tests
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Stores a serialized JSON payload and indexes it under `sort_key`.
    ///
    /// When `id` is None a fresh v4 UUID is generated. Returns the id the
    /// record was stored under. Fails on malformed payload JSON or a
    /// duplicate id; on failure nothing is stored or indexed.
    pub fn insert(&mut self, payload: &str, sort_key: &str, id: Option<&str>) -> StoreResult<String> {
        serde_json::from_str::<serde_json::Value>(payload)?;
        self.store_validated(payload.to_string(), sort_key, id)
    }

    /// Serializes `record` to JSON and stores it, see [`insert`](Self::insert).
    pub fn insert_serialized<T: Serialize>(
        &mut self,
        record: &T,
        sort_key: &str,
        id: Option<&str>,
    ) -> StoreResult<String> {
        let payload = serde_json::to_string(record)?;
        self.store_validated(payload, sort_key, id)
    }

    /// Stores a batch of `(payload, sort_key)` items under generated ids.
    ///
    /// All payloads are validated before anything is stored, so a malformed
    /// item fails the whole batch without a partial write. The sorted index
    /// re-sorts once for the entire batch. Returns the generated ids in
    /// item order.
    pub fn insert_many(&mut self, items: &[(String, String)]) -> StoreResult<Vec<String>> {
        for (payload, _) in items {
            serde_json::from_str::<serde_json::Value>(payload)?;
        }

        let mut pairs = Vec::with_capacity(items.len());
        for (payload, sort_key) in items {
            let id = Uuid::new_v4().to_string();
            self.records.insert(id.clone(), payload.clone());
            pairs.push((id, sort_key.clone()));
        }
        self.indexes.bulk_add_records(&pairs);

        let count = items.len().to_string();
        self.logger
            .event(Severity::Info, "record_bulk_insert", &[("count", count.as_str())]);

        Ok(pairs.into_iter().map(|(id, _)| id).collect())
    }

    fn store_validated(
        &mut self,
        payload: String,
        sort_key: &str,
        id: Option<&str>,
    ) -> StoreResult<String> {
        let id = match id {
            Some(id) => {
                if self.records.contains_key(id) {
                    return Err(StoreError::DuplicateId(id.to_string()));
                }
                id.to_string()
            }
            None => Uuid::new_v4().to_string(),
        };

        self.records.insert(id.clone(), payload);
        self.indexes.add_record(&id, sort_key);

        self.logger.event(
            Severity::Trace,
            "record_insert",
            &[("id", id.as_str()), ("sort_key", sort_key)],
        );

        Ok(id)
    }

    /// The stored payload for `id`, if any
    pub fn get(&self, id: &str) -> Option<&str> {
        self.records.get(id).map(String::as_str)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Direct access to the underlying indexes for id-level queries
    pub fn indexes(&self) -> &IndexCoordinator {
        &self.indexes
    }

    /// Payloads of records whose sort key equals `sort_key` exactly,
    /// in first-insertion order
    pub fn find_exact(&self, sort_key: &str) -> Vec<&str> {
        self.resolve_ids(&self.indexes.lookup(sort_key))
    }

    /// Payloads of records whose sort key begins with `prefix`,
    /// in first-insertion order
    pub fn find_begins_with(&self, prefix: &str) -> Vec<&str> {
        self.resolve_ids(&self.indexes.begins_with(prefix))
    }

    /// Payloads of records with sort key strictly greater than `key`,
    /// in ascending key order
    pub fn find_greater_than(&self, key: &str) -> StoreResult<Vec<&str>> {
        Ok(self.resolve_entries(self.indexes.greater_than(key)?))
    }

    /// Payloads of records with sort key greater than or equal to `key`
    pub fn find_greater_than_or_equal(&self, key: &str) -> StoreResult<Vec<&str>> {
        Ok(self.resolve_entries(self.indexes.greater_than_or_equal(key)?))
    }

    /// Payloads of records with sort key strictly less than `key`
    pub fn find_less_than(&self, key: &str) -> StoreResult<Vec<&str>> {
        Ok(self.resolve_entries(self.indexes.less_than(key)?))
    }

    /// Payloads of records with sort key less than or equal to `key`
    pub fn find_less_than_or_equal(&self, key: &str) -> StoreResult<Vec<&str>> {
        Ok(self.resolve_entries(self.indexes.less_than_or_equal(key)?))
    }

    /// Payloads of records with sort key in `[a, b]` inclusive,
    /// argument order ignored
    pub fn find_between(&self, a: &str, b: &str) -> StoreResult<Vec<&str>> {
        Ok(self.resolve_entries(self.indexes.between(a, b)?))
    }

    /// Dereferences ids into payloads, keeping id order
    fn resolve_ids(&self, ids: &[String]) -> Vec<&str> {
        ids.iter()
            .filter_map(|id| self.records.get(id).map(String::as_str))
            .collect()
    }

    /// Dereferences range-query entries into payloads: ascending key
    /// order, first-insertion order within a key
    fn resolve_entries(&self, entries: &[SortedEntry]) -> Vec<&str> {
        entries
            .iter()
            .flat_map(|entry| entry.ids.iter())
            .filter_map(|id| self.records.get(id).map(String::as_str))
            .collect()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
