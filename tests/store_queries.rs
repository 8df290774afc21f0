//! Record store integration tests
//!
//! End-to-end: payloads in, ids generated, queries answered by the indexes
//! and dereferenced back into payloads.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use serde_json::json;
use sortdex::observability::{Logger, Severity};
use sortdex::store::{RecordStore, StoreError};

// =============================================================================
// Helper Functions
// =============================================================================

/// Writer that can be read back after being handed to the logger
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn quiet_store() -> RecordStore {
    RecordStore::new().with_logger(Logger::with_sink(Severity::Error, Box::new(io::sink())))
}

fn punch_payload(day: u32) -> String {
    json!({ "kind": "punch", "day": day }).to_string()
}

fn punch_key(day: u32) -> String {
    format!("punch#2021-01-{:02}", day)
}

// =============================================================================
// Round Trips
// =============================================================================

/// A stored record is reachable by id, exact key, prefix, and range.
#[test]
fn test_record_reachable_through_every_index() {
    let mut store = quiet_store();
    let id = store.insert(&punch_payload(4), &punch_key(4), None).unwrap();

    let payload = punch_payload(4);
    assert_eq!(store.get(&id), Some(payload.as_str()));
    assert_eq!(store.find_exact(&punch_key(4)), vec![payload.as_str()]);
    assert_eq!(store.find_begins_with("punch#2021"), vec![payload.as_str()]);
    assert_eq!(
        store.find_between("punch#2021-01-01", "punch#2021-01-31").unwrap(),
        vec![payload.as_str()]
    );
}

/// Range finders return payloads in ascending key order.
#[test]
fn test_range_finder_ordering() {
    let mut store = quiet_store();
    for day in [9, 3, 27, 14] {
        store.insert(&punch_payload(day), &punch_key(day), None).unwrap();
    }

    let found = store.find_greater_than_or_equal(&punch_key(9)).unwrap();
    assert_eq!(
        found,
        vec![punch_payload(9), punch_payload(14), punch_payload(27)]
    );

    let found = store.find_less_than_or_equal(&punch_key(9)).unwrap();
    assert_eq!(found, vec![punch_payload(3), punch_payload(9)]);
}

/// Records sharing a sort key come back in first-insertion order.
#[test]
fn test_shared_sort_key_insertion_order() {
    let mut store = quiet_store();
    store.insert(r#"{"n":1}"#, "shift#morning", Some("a")).unwrap();
    store.insert(r#"{"n":2}"#, "shift#morning", Some("b")).unwrap();

    assert_eq!(store.find_exact("shift#morning"), vec![r#"{"n":1}"#, r#"{"n":2}"#]);
}

// =============================================================================
// Bulk Path
// =============================================================================

/// The bulk path indexes a batch identically to one-at-a-time insertion.
#[test]
fn test_bulk_matches_single_insertions() {
    let items: Vec<(String, String)> = (1..=12)
        .map(|day| (punch_payload(day), punch_key(day)))
        .collect();

    let mut singles = quiet_store();
    for (payload, key) in &items {
        singles.insert(payload, key, None).unwrap();
    }

    let mut bulk = quiet_store();
    bulk.insert_many(&items).unwrap();

    for day in 1..=12 {
        assert_eq!(singles.find_exact(&punch_key(day)), bulk.find_exact(&punch_key(day)));
    }
    assert_eq!(
        singles.find_greater_than(&punch_key(6)).unwrap(),
        bulk.find_greater_than(&punch_key(6)).unwrap()
    );
}

// =============================================================================
// Failure Surface
// =============================================================================

/// Duplicate ids are rejected; malformed payloads are rejected.
#[test]
fn test_rejections() {
    let mut store = quiet_store();
    store.insert("{}", "key#one", Some("dup")).unwrap();

    assert!(matches!(
        store.insert("{}", "key#two", Some("dup")),
        Err(StoreError::DuplicateId(_))
    ));
    assert!(matches!(
        store.insert("not json", "key#three", None),
        Err(StoreError::InvalidPayload(_))
    ));
    assert_eq!(store.len(), 1);
}

// =============================================================================
// Logging
// =============================================================================

/// Bulk insertion emits one structured event with the batch size.
#[test]
fn test_bulk_insert_logged() {
    let capture = CapturedLog::default();
    let mut store = RecordStore::new()
        .with_logger(Logger::with_sink(Severity::Info, Box::new(capture.clone())));

    let items = vec![
        (punch_payload(1), punch_key(1)),
        (punch_payload(2), punch_key(2)),
    ];
    store.insert_many(&items).unwrap();

    let logged = capture.contents();
    let line: serde_json::Value = serde_json::from_str(logged.lines().next().unwrap()).unwrap();
    assert_eq!(line["event"], "record_bulk_insert");
    assert_eq!(line["count"], "2");
}
