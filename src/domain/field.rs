//! Shared behaviour of validated scalar fields.

use super::errors::ValidationError;

/// A validated string value.
///
/// Every implementor runs the same predicate in `new` and in [`Field::set_value`],
/// so a field can never hold a value that failed validation. A rejected
/// `set_value` leaves the previous value in place.
pub trait Field {
    /// Replace the stored value after validating `value`.
    fn set_value(&mut self, value: &str) -> Result<(), ValidationError>;

    /// The canonical textual form of the value.
    fn as_str(&self) -> &str;
}
