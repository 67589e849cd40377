//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact fields: names, phone
//! numbers and birthdays. These value objects validate at construction time
//! and on every mutation, so invalid data can never be represented.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
