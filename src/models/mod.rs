//! Data models for the contact book.
//!
//! This module contains the record structure stored in the address book.

pub mod record;

pub use record::Record;
