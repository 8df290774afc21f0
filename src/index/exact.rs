//! Exact sort-key index
//!
//! Maps a full sort key to every id inserted with exactly that key.

use std::collections::HashMap;

use super::id_set::IdSet;

/// Exact-match index: `sort key -> ids`.
///
/// A sort key is present iff at least one id was inserted with it, and its
/// set is never empty while the key exists.
#[derive(Debug, Default)]
pub struct ExactIndex {
    keys: HashMap<String, IdSet>,
}

impl ExactIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` under `sort_key`, creating the set if absent.
    ///
    /// Always succeeds; re-inserting the same pair is a no-op.
    pub fn insert(&mut self, id: &str, sort_key: &str) {
        self.keys.entry(sort_key.to_string()).or_default().insert(id);
    }

    /// Ids inserted with exactly `sort_key`, in first-insertion order.
    ///
    /// An absent key yields an empty result, never an error.
    pub fn lookup(&self, sort_key: &str) -> Vec<String> {
        self.keys.get(sort_key).map(IdSet::to_vec).unwrap_or_default()
    }

    /// Number of distinct sort keys
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }
}
