use crate::error::StorageResult;
use crate::models::Record;
use indexmap::IndexMap;

/// Contact name to record, in insertion order.
pub type RecordMap = IndexMap<String, Record>;

/// Persistence for the address book.
///
/// Provides abstraction over where the name-to-record mapping lives,
/// enabling different implementations (JSON file, in-memory mock).
/// Stores hold the whole mapping: every save replaces what was there.
pub trait RecordStore {
    /// Read the stored mapping.
    ///
    /// Returns `StorageError::NotFound` when nothing has been saved yet.
    fn load(&self) -> StorageResult<RecordMap>;

    /// Replace the stored mapping with `records`.
    fn save(&mut self, records: &RecordMap) -> StorageResult<()>;
}
