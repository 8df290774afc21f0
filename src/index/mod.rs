//! Multi-index core for sortdex
//!
//! Three cooperating in-memory indexes over `(id, sort key)` pairs, kept
//! consistent by the [`IndexCoordinator`]:
//!
//! - [`ExactIndex`]: full sort key -> ids
//! - [`PrefixIndex`]: every sort-key prefix of >= 3 characters -> ids
//! - [`SortedIndex`]: one ascending sequence of distinct sort keys,
//!   answering the five range queries by binary search and slicing
//!
//! # Design Principles
//!
//! - Insert-only: nothing removes or mutates an existing association
//! - Idempotent: re-inserting a pair has no observable effect
//! - Total queries: absent keys and empty inputs yield empty results
//! - Single-threaded: callers guard concurrent access externally

mod coordinator;
mod errors;
mod exact;
mod id_set;
mod prefix;
mod sorted;

pub use coordinator::IndexCoordinator;
pub use errors::{IndexError, IndexResult, Severity};
pub use exact::ExactIndex;
pub use id_set::IdSet;
pub use prefix::{PrefixIndex, MIN_PREFIX_LEN};
pub use sorted::{IndexConfig, SortedEntry, SortedIndex, DEFAULT_SEARCH_THRESHOLD};
