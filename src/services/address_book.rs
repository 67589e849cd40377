//! Address book service.
//!
//! Owns every record, keyed by contact name, and persists the whole mapping
//! through a [`RecordStore`] after each structural change.

use crate::error::{BookError, BookResult, StorageError};
use crate::models::Record;
use crate::repositories::{RecordMap, RecordStore};
use chrono::{Local, NaiveDate};
use std::fmt;
use tracing::{debug, info, warn};

/// The contact collection plus its persistence contract.
///
/// Single-threaded: saves are blocking and happen inside the call that
/// changed the mapping.
pub struct AddressBook<S: RecordStore> {
    records: RecordMap,
    store: S,
}

impl<S: RecordStore> AddressBook<S> {
    /// Open the book, loading whatever the store holds.
    ///
    /// A store that does not exist yet gives an empty book. Any other storage
    /// failure is returned.
    pub fn open(store: S) -> BookResult<Self> {
        let mut book = Self {
            records: RecordMap::new(),
            store,
        };
        book.load()?;
        Ok(book)
    }

    /// Replace the in-memory records with the store's contents.
    ///
    /// When the store does not exist yet the records in memory are kept.
    pub fn load(&mut self) -> BookResult<()> {
        match self.store.load() {
            Ok(records) => {
                info!(count = records.len(), "Contacts loaded");
                self.records = records;
            }
            Err(StorageError::NotFound(path)) => {
                warn!(path = %path.display(), "No saved contacts, address book is empty");
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    /// Write every record to the store.
    pub fn save(&mut self) -> BookResult<()> {
        self.store.save(&self.records)?;
        Ok(())
    }

    /// Insert `record` under its name, replacing any record with that name, then save.
    pub fn add_record(&mut self, record: Record) -> BookResult<()> {
        let name = record.name().as_str().to_string();
        debug!(name = %name, "Adding record");
        self.records.insert(name, record);
        self.save()
    }

    /// Remove the record called `name`.
    ///
    /// Saves only when a record was removed. Returns whether one was.
    pub fn delete(&mut self, name: &str) -> BookResult<bool> {
        if self.records.shift_remove(name).is_none() {
            debug!(name = %name, "Nothing to delete");
            return Ok(false);
        }
        debug!(name = %name, "Deleted record");
        self.save()?;
        Ok(true)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable access to a stored record.
    ///
    /// Changes made through this reference are written on the next save.
    /// The record's name must not be changed, as it is the lookup key.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Records matching `query`, in insertion order.
    ///
    /// A record is listed once if `query` is a case-insensitive substring of its
    /// name, and once more for every phone containing `query`. The same record
    /// can therefore appear several times. An empty query matches nothing.
    pub fn search_contacts(&self, query: &str) -> Vec<&Record> {
        let mut found = Vec::new();
        if query.is_empty() {
            return found;
        }

        let needle = query.to_lowercase();
        for record in self.records.values() {
            if record.name().as_str().to_lowercase().contains(&needle) {
                found.push(record);
            }
            for phone in record.phones() {
                if phone.as_str().contains(query) {
                    found.push(record);
                }
            }
        }

        debug!(query = %query, matches = found.len(), "Searched contacts");
        found
    }

    /// Page through the book, `page_size` records per page.
    ///
    /// The records are rendered when this is called, so later changes to the
    /// book do not show up in the returned pages.
    pub fn paginate(&self, page_size: usize) -> BookResult<Pages> {
        self.paginate_on(page_size, Local::now().date_naive())
    }

    /// Same as [`AddressBook::paginate`], counting birthdays from `today`.
    pub fn paginate_on(&self, page_size: usize, today: NaiveDate) -> BookResult<Pages> {
        if page_size == 0 {
            return Err(BookError::InvalidPageSize);
        }

        let lines = self
            .records
            .values()
            .map(|record| record.summary_on(today))
            .collect();

        Ok(Pages {
            lines,
            page_size,
            offset: 0,
        })
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: RecordStore> fmt::Display for AddressBook<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.records.values().map(Record::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Pages of rendered records, produced by [`AddressBook::paginate`].
///
/// Cloning gives an independent iterator from the same position, so a
/// listing can be replayed.
#[derive(Debug, Clone)]
pub struct Pages {
    lines: Vec<String>,
    page_size: usize,
    offset: usize,
}

impl Iterator for Pages {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.offset >= self.lines.len() {
            return None;
        }
        let end = (self.offset + self.page_size).min(self.lines.len());
        let page = self.lines[self.offset..end].join("\n");
        self.offset = end;
        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.lines.len().saturating_sub(self.offset);
        let pages = remaining.div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages {}

impl std::iter::FusedIterator for Pages {}
