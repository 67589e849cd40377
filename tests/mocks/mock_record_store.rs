use contact_book::error::{StorageError, StorageResult};
use contact_book::repositories::{RecordMap, RecordStore};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock record store for testing.
///
/// Keeps the saved mapping in memory and tracks method calls for
/// verification. Clones share state, so a test can keep a handle after
/// moving the store into an `AddressBook`.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockRecordStore {
    saved: Arc<Mutex<Option<RecordMap>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockRecordStore {
    /// Create a new empty MockRecordStore; loading it reports a missing store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `records`.
    pub fn with_records(records: RecordMap) -> Self {
        let store = Self::new();
        *store.saved.lock().unwrap() = Some(records);
        store
    }

    /// The mapping from the last save, if any.
    pub fn saved(&self) -> Option<RecordMap> {
        self.saved.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl RecordStore for MockRecordStore {
    fn load(&self) -> StorageResult<RecordMap> {
        self.track_call("load");

        self.saved
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| StorageError::NotFound(PathBuf::from("mock")))
    }

    fn save(&mut self, records: &RecordMap) -> StorageResult<()> {
        self.track_call("save");

        *self.saved.lock().unwrap() = Some(records.clone());
        Ok(())
    }
}
