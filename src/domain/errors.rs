//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or contains non-alphabetic characters.
    InvalidName(String),

    /// The provided phone number does not have exactly 10 characters.
    InvalidPhoneLength(String),

    /// The provided phone number has the right length but contains a non-digit.
    InvalidPhoneDigits(String),

    /// The provided birthday is not a real date in `DD.MM.YYYY` form.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "Wrong name: {:?}", name),
            Self::InvalidPhoneLength(phone) => {
                write!(f, "Wrong phone number: {:?} (must be 10 digits)", phone)
            }
            Self::InvalidPhoneDigits(phone) => {
                write!(f, "Invalid literal in phone number: {:?}", phone)
            }
            Self::InvalidBirthday(birthday) => write!(
                f,
                "Wrong data of birthday: {:?}. Correct format: DD.MM.YYYY",
                birthday
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
