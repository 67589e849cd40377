//! Application service layer.
//!
//! Services hold the contact collection and orchestrate persistence through
//! the repositories.

mod address_book;

pub use address_book::{AddressBook, Pages};
