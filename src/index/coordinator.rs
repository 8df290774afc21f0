//! Index coordinator
//!
//! The single entry point for insertion. One `(id, sort key)` pair fans out
//! to the exact, prefix, and sorted indexes; each query is forwarded to the
//! one index that answers it. The coordinator holds no state of its own
//! beyond the three indexes.

use super::errors::IndexResult;
use super::exact::ExactIndex;
use super::prefix::PrefixIndex;
use super::sorted::{IndexConfig, SortedEntry, SortedIndex};

/// Owns the three cooperating indexes and keeps them consistent.
#[derive(Debug, Default)]
pub struct IndexCoordinator {
    exact: ExactIndex,
    prefix: PrefixIndex,
    sorted: SortedIndex,
}

impl IndexCoordinator {
    /// Creates an empty coordinator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty coordinator with an explicit configuration
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            exact: ExactIndex::new(),
            prefix: PrefixIndex::new(),
            sorted: SortedIndex::with_config(config),
        }
    }

    /// Registers `(id, sort_key)` in all three indexes.
    ///
    /// The three inserts are independent of one another and none can fail,
    /// so there is no ordering requirement and no rollback path.
    pub fn add_record(&mut self, id: &str, sort_key: &str) {
        self.exact.insert(id, sort_key);
        self.prefix.insert(id, sort_key);
        self.sorted.insert(id, sort_key);
    }

    /// Registers a batch of `(id, sort_key)` pairs.
    ///
    /// The sorted index takes its bulk path and re-sorts once for the whole
    /// batch. The exact and prefix indexes are updated per item; they have
    /// no bulk-optimized path and do not need one.
    pub fn bulk_add_records(&mut self, items: &[(String, String)]) {
        for (id, sort_key) in items {
            self.exact.insert(id, sort_key);
            self.prefix.insert(id, sort_key);
        }
        self.sorted.bulk_insert(items);
    }

    /// Ids whose sort key equals `sort_key` exactly
    pub fn lookup(&self, sort_key: &str) -> Vec<String> {
        self.exact.lookup(sort_key)
    }

    /// Ids whose sort key begins with `prefix` (at least 3 characters)
    pub fn begins_with(&self, prefix: &str) -> Vec<String> {
        self.prefix.begins_with(prefix)
    }

    /// Entries with sort key strictly greater than `key`
    pub fn greater_than(&self, key: &str) -> IndexResult<&[SortedEntry]> {
        self.sorted.greater_than(key)
    }

    /// Entries with sort key greater than or equal to `key`
    pub fn greater_than_or_equal(&self, key: &str) -> IndexResult<&[SortedEntry]> {
        self.sorted.greater_than_or_equal(key)
    }

    /// Entries with sort key strictly less than `key`
    pub fn less_than(&self, key: &str) -> IndexResult<&[SortedEntry]> {
        self.sorted.less_than(key)
    }

    /// Entries with sort key less than or equal to `key`
    pub fn less_than_or_equal(&self, key: &str) -> IndexResult<&[SortedEntry]> {
        self.sorted.less_than_or_equal(key)
    }

    /// Entries with sort key in `[a, b]` inclusive, argument order ignored
    pub fn between(&self, a: &str, b: &str) -> IndexResult<&[SortedEntry]> {
        self.sorted.between(a, b)
    }

    /// The full ascending sequence of distinct sort keys
    pub fn sorted_entries(&self) -> &[SortedEntry] {
        self.sorted.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_record_reaches_all_three_indexes() {
        let mut coordinator = IndexCoordinator::new();
        coordinator.add_record("id1", "punch#2021-01-01");

        assert_eq!(coordinator.lookup("punch#2021-01-01"), vec!["id1"]);
        assert_eq!(coordinator.begins_with("punch"), vec!["id1"]);
        assert_eq!(coordinator.sorted_entries().len(), 1);
        assert_eq!(coordinator.sorted_entries()[0].key, "punch#2021-01-01");
    }

    #[test]
    fn test_bulk_matches_single_insertion() {
        let items: Vec<(String, String)> = (0..5)
            .map(|i| (format!("id{}", i), format!("key#{}", 9 - i)))
            .collect();

        let mut one_by_one = IndexCoordinator::new();
        for (id, sort_key) in &items {
            one_by_one.add_record(id, sort_key);
        }

        let mut bulk = IndexCoordinator::new();
        bulk.bulk_add_records(&items);

        assert_eq!(one_by_one.sorted_entries(), bulk.sorted_entries());
        for (id, sort_key) in &items {
            assert_eq!(one_by_one.lookup(sort_key), bulk.lookup(sort_key));
            assert_eq!(bulk.lookup(sort_key), vec![id.clone()]);
        }
    }

    #[test]
    fn test_repeated_add_record_is_idempotent() {
        let mut coordinator = IndexCoordinator::new();
        coordinator.add_record("id1", "punch#2021-01-01");
        coordinator.add_record("id1", "punch#2021-01-01");

        assert_eq!(coordinator.lookup("punch#2021-01-01").len(), 1);
        assert_eq!(coordinator.begins_with("punch#2021").len(), 1);
        assert_eq!(coordinator.sorted_entries()[0].ids.len(), 1);
    }

    #[test]
    fn test_queries_on_empty_coordinator() {
        let coordinator = IndexCoordinator::new();

        assert!(coordinator.lookup("any").is_empty());
        assert!(coordinator.begins_with("any").is_empty());
        assert!(coordinator.greater_than("any").unwrap().is_empty());
        assert!(coordinator.less_than("any").unwrap().is_empty());
        assert!(coordinator.between("a", "b").unwrap().is_empty());
    }
}
