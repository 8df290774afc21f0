//! Sorted sort-key sequence and range queries
//!
//! One ascending sequence of `{key, ids}` entries, one entry per distinct
//! sort key. Every mutation leaves the sequence fully sorted before it can
//! be observed, so the five range queries reduce to finding one boundary
//! index and slicing.
//!
//! # Invariants
//!
//! - Entries are sorted ascending by key at every adjacent pair
//! - Keys are unique across entries
//! - Ordering is byte-wise lexicographic (`Ord` on `str`), locale-independent

use std::collections::HashMap;

use super::errors::{IndexError, IndexResult};
use super::id_set::IdSet;

/// Default crossover between the linear scan and binary search in
/// [`SortedIndex::find_index`]. Below this entry count the fixed overhead
/// of the recursive search loses to a straight scan.
pub const DEFAULT_SEARCH_THRESHOLD: usize = 100;

/// Configuration for the sorted index.
///
/// The crossover is a performance heuristic, not a correctness rule: both
/// search paths answer every query identically.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Entry count at which `find_index` switches from a linear scan to
    /// recursive binary search.
    pub search_threshold: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            search_threshold: DEFAULT_SEARCH_THRESHOLD,
        }
    }
}

impl IndexConfig {
    /// Config that keeps every search on the linear path
    pub fn linear_only() -> Self {
        Self {
            search_threshold: usize::MAX,
        }
    }

    /// Config that uses binary search from the first entry
    pub fn binary_always() -> Self {
        Self {
            search_threshold: 0,
        }
    }
}

/// One distinct sort key and the ids inserted under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedEntry {
    /// The sort key
    pub key: String,
    /// Ids inserted with this key, in first-insertion order
    pub ids: IdSet,
}

/// The ordered index answering greater-than, greater-or-equal, less-than,
/// less-or-equal, and between queries over the universe of sort keys.
#[derive(Debug, Default)]
pub struct SortedIndex {
    entries: Vec<SortedEntry>,
    config: IndexConfig,
}

impl SortedIndex {
    /// Creates an empty index with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty index with an explicit configuration
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            entries: Vec::new(),
            config,
        }
    }

    /// Number of distinct sort keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the index holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The full ascending sequence
    pub fn entries(&self) -> &[SortedEntry] {
        &self.entries
    }

    /// Registers `(id, sort_key)`.
    ///
    /// An existing key gains the id in place; the order is unaffected and
    /// nothing re-sorts. A new key is appended and the whole sequence
    /// re-sorted, which is O(n log n) per insert. Fine for single
    /// insertions; batches belong on [`bulk_insert`](Self::bulk_insert).
    pub fn insert(&mut self, id: &str, sort_key: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key == sort_key) {
            entry.ids.insert(id);
            return;
        }

        self.entries.push(SortedEntry {
            key: sort_key.to_string(),
            ids: IdSet::single(id),
        });
        self.entries.sort_by(|a, b| a.key.cmp(&b.key));
    }

    /// Registers a whole batch of `(id, sort_key)` pairs with one sort.
    ///
    /// The live sequence and the new items are merged into a single map
    /// keyed by sort key, converted back to a sequence, sorted once, and
    /// swapped in as the new live sequence in one step. One
    /// O((n+m) log(n+m)) sort instead of m re-sorts.
    pub fn bulk_insert(&mut self, items: &[(String, String)]) {
        let mut merged: HashMap<String, IdSet> = HashMap::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            merged.insert(entry.key, entry.ids);
        }
        for (id, sort_key) in items {
            merged.entry(sort_key.clone()).or_default().insert(id);
        }

        let mut rebuilt: Vec<SortedEntry> = merged
            .into_iter()
            .map(|(key, ids)| SortedEntry { key, ids })
            .collect();
        rebuilt.sort_by(|a, b| a.key.cmp(&b.key));

        self.entries = rebuilt;
    }

    /// Index of the first entry whose key is `>= key` (inclusive) or
    /// `> key` (exclusive), or None when no entry qualifies.
    ///
    /// Below the configured threshold this is a linear scan; at or above
    /// it, a recursive binary search over the closed range
    /// `[0, len - 1]`. The two paths are observably equivalent.
    pub fn find_index(&self, key: &str, inclusive: bool) -> IndexResult<Option<usize>> {
        if self.entries.is_empty() {
            return Ok(None);
        }

        if self.entries.len() < self.config.search_threshold {
            return Ok(self
                .entries
                .iter()
                .position(|entry| satisfies(&entry.key, key, inclusive)));
        }

        self.binary_search(key, inclusive, 0, self.entries.len() - 1)
    }

    /// Recursive binary search over the closed range `[lower, upper]`.
    ///
    /// Keys are unique across entries, so an exact hit at the midpoint pins
    /// the answer for both predicates: the hit itself for `>=`, the next
    /// entry (if any) for `>`. At `lower == upper` the predicate at that
    /// last candidate decides.
    fn binary_search(
        &self,
        key: &str,
        inclusive: bool,
        lower: usize,
        upper: usize,
    ) -> IndexResult<Option<usize>> {
        let middle = (lower + upper) / 2;
        let entry = self
            .entries
            .get(middle)
            .ok_or(IndexError::SearchOutOfRange {
                index: middle,
                len: self.entries.len(),
            })?;

        if entry.key == key {
            if inclusive {
                return Ok(Some(middle));
            }
            if middle + 1 < self.entries.len() {
                return Ok(Some(middle + 1));
            }
            return Ok(None);
        }

        if lower == upper {
            return Ok(satisfies(&entry.key, key, inclusive).then_some(middle));
        }

        if satisfies(&entry.key, key, inclusive) {
            self.binary_search(key, inclusive, lower, middle)
        } else {
            self.binary_search(key, inclusive, middle + 1, upper)
        }
    }

    /// Entries with key strictly greater than `key`
    pub fn greater_than(&self, key: &str) -> IndexResult<&[SortedEntry]> {
        match self.find_index(key, false)? {
            Some(index) => Ok(&self.entries[index..]),
            None => Ok(&[]),
        }
    }

    /// Entries with key greater than or equal to `key`
    pub fn greater_than_or_equal(&self, key: &str) -> IndexResult<&[SortedEntry]> {
        match self.find_index(key, true)? {
            Some(index) => Ok(&self.entries[index..]),
            None => Ok(&[]),
        }
    }

    /// Entries with key strictly less than `key`.
    ///
    /// Complement of [`greater_than_or_equal`](Self::greater_than_or_equal):
    /// everything before the first `>= key` entry, or the whole sequence
    /// when every key is below `key`.
    pub fn less_than(&self, key: &str) -> IndexResult<&[SortedEntry]> {
        match self.find_index(key, true)? {
            Some(index) => Ok(&self.entries[..index]),
            None => Ok(&self.entries),
        }
    }

    /// Entries with key less than or equal to `key`.
    ///
    /// Complement of [`greater_than`](Self::greater_than).
    pub fn less_than_or_equal(&self, key: &str) -> IndexResult<&[SortedEntry]> {
        match self.find_index(key, false)? {
            Some(index) => Ok(&self.entries[..index]),
            None => Ok(&self.entries),
        }
    }

    /// Entries with key in `[a, b]`, both endpoints included.
    ///
    /// Argument order does not matter; a reversed pair queries `[b, a]`.
    pub fn between(&self, a: &str, b: &str) -> IndexResult<&[SortedEntry]> {
        let (low, high) = if a > b { (b, a) } else { (a, b) };

        let Some(start) = self.find_index(low, true)? else {
            // The low bound is past the end of all data
            return Ok(&[]);
        };

        match self.find_index(high, false)? {
            // The high bound is past the end of all data
            None => Ok(&self.entries[start..]),
            Some(end) => {
                if start == 0 && end == 0 {
                    // "range covers only the first entry" and "range covers
                    // nothing" both land here; the first key decides.
                    let first = &self.entries[0];
                    if first.key.as_str() > high {
                        return Ok(&[]);
                    }
                    return Ok(&self.entries[..1]);
                }
                Ok(&self.entries[start..end])
            }
        }
    }
}

/// The boundary predicate: `candidate >= key` or strictly `>`.
fn satisfies(candidate: &str, key: &str, inclusive: bool) -> bool {
    if inclusive {
        candidate >= key
    } else {
        candidate > key
    }
}
