//! Test fixtures and sample data.
//!
//! This module provides reusable records for address book tests.

use contact_book::Record;

/// Create a record with a name and any number of phones.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name, None, None).expect("valid sample name");
    for phone in phones {
        record.add_phone(phone).expect("valid sample phone");
    }
    record
}

/// Create a record with a birthday and a single phone.
#[allow(dead_code)]
pub fn sample_record_with_birthday(name: &str, phone: &str, birthday: &str) -> Record {
    Record::new(name, Some(phone), Some(birthday)).expect("valid sample record")
}
