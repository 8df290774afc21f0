//! sortdex - A strict, deterministic, in-memory multi-index over sort-keyed records
//!
//! Records are opaque payloads identified by a unique id and tagged with a
//! string sort key. Three cooperating indexes answer exact-match lookup by
//! full sort key, prefix lookup by a leading substring of at least 3
//! characters, and the five ordered range queries (greater-than,
//! greater-or-equal, less-than, less-or-equal, between) over the universe
//! of sort keys.
//!
//! Everything is in-process and in-memory: no persistence, no concurrency
//! control, no deletion. Callers needing multi-threaded access wrap the
//! structures in their own synchronization.

pub mod index;
pub mod observability;
pub mod store;
