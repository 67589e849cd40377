//! Contact Book - a personal contact manager with validated records.
//!
//! Contacts carry a validated name, a list of phone numbers and an optional
//! birthday. The address book keeps them keyed by name, persists the whole
//! collection to a JSON file after every change, and supports search and
//! paged listing.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday)
//! - **models**: The contact record
//! - **repositories**: Persistence of the name-to-record mapping
//! - **services**: The address book itself
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError, StorageError};
pub use models::Record;
pub use repositories::{JsonFileStore, RecordMap, RecordStore};
pub use services::{AddressBook, Pages};
