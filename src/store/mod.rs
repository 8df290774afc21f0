//! Record store subsystem for sortdex
//!
//! A thin opaque-payload store in front of the index core: ids map to
//! serialized JSON payloads, queries run against the indexes and
//! dereference the resulting ids back into payloads.

mod errors;
mod records;

pub use errors::{StoreError, StoreResult};
pub use records::RecordStore;
