//! Insertion-ordered id sets
//!
//! All three indexes group ids into sets. Iteration order is first-insertion
//! order and duplicate inserts are absorbed, which is what makes repeated
//! insertion of the same `(id, sort key)` pair observationally idempotent
//! everywhere.

/// A duplicate-free collection of ids preserving first-insertion order.
///
/// Backed by a Vec with a linear membership probe: id sets stay small (ids
/// sharing one sort key or prefix), so a hash set per entry is not worth
/// the allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSet {
    ids: Vec<String>,
}

impl IdSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set holding a single id
    pub fn single(id: impl Into<String>) -> Self {
        Self {
            ids: vec![id.into()],
        }
    }

    /// Adds an id. Returns true if it was newly inserted.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Returns whether the set holds `id`
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Number of ids in the set
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in first-insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Copies the ids out in first-insertion order
    pub fn to_vec(&self) -> Vec<String> {
        self.ids.clone()
    }
}
