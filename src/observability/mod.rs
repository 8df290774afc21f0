//! Observability for sortdex
//!
//! Structured JSON logging only. Observability is read-only, synchronous,
//! and deterministic; a logging failure never fails the operation being
//! observed.

mod logger;

pub use logger::{Logger, Severity};
