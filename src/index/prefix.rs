//! Prefix index over sort keys
//!
//! Every prefix of a sort key from [`MIN_PREFIX_LEN`] characters up to the
//! full key length is materialized as its own map entry. That trades memory
//! (one entry per prefix length per insertion) for O(1) prefix lookup with
//! no scan or trie traversal, which holds up because sort keys are short,
//! structured identifiers.

use std::collections::HashMap;

use super::id_set::IdSet;

/// Shortest prefix length registered for lookup, in characters.
pub const MIN_PREFIX_LEN: usize = 3;

/// Prefix-match index: `prefix -> ids whose sort key starts with it`.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    prefixes: HashMap<String, IdSet>,
}

impl PrefixIndex {
    /// Creates an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` under every prefix of `sort_key` with at least
    /// [`MIN_PREFIX_LEN`] characters.
    ///
    /// A sort key shorter than [`MIN_PREFIX_LEN`] characters registers
    /// nothing and is unreachable by prefix query. Prefixes are taken on
    /// char boundaries, so multi-byte keys never split a code point.
    pub fn insert(&mut self, id: &str, sort_key: &str) {
        let mut end = 0;
        for (count, ch) in sort_key.chars().enumerate() {
            end += ch.len_utf8();
            if count + 1 < MIN_PREFIX_LEN {
                continue;
            }
            self.prefixes
                .entry(sort_key[..end].to_string())
                .or_default()
                .insert(id);
        }
    }

    /// Ids registered under exactly this prefix, in first-insertion order.
    ///
    /// An unregistered prefix (including any shorter than
    /// [`MIN_PREFIX_LEN`]) yields an empty result, never an error.
    pub fn begins_with(&self, prefix: &str) -> Vec<String> {
        self.prefixes.get(prefix).map(IdSet::to_vec).unwrap_or_default()
    }

    /// Number of distinct prefixes registered
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }
}
