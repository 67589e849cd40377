//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// chrono's `%d`/`%m`/`%Y` accept unpadded input, so the exact shape is
/// checked separately.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday regex is valid")
});

const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A birthday in `DD.MM.YYYY` form.
///
/// The text is kept verbatim for display and storage; the parsed date is
/// kept alongside it for anniversary arithmetic.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("12.12.1970").unwrap();
/// assert_eq!(birthday.as_str(), "12.12.1970");
/// assert!(Birthday::new("30.02.2020").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the value is not
    /// zero-padded `DD.MM.YYYY` or is not a real calendar date.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let text = birthday.into();
        let date = Self::parse(&text)?;
        Ok(Self { text, date })
    }

    fn parse(text: &str) -> Result<NaiveDate, ValidationError> {
        if !BIRTHDAY_SHAPE.is_match(text) {
            return Err(ValidationError::InvalidBirthday(text.to_string()));
        }
        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))
    }

    /// Get the birthday as it was entered.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The anniversary of this birthday in `year`.
    ///
    /// A 29 February birthday falls on 1 March in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

impl Field for Birthday {
    fn set_value(&mut self, value: &str) -> Result<(), ValidationError> {
        self.date = Self::parse(value)?;
        self.text = value.to_string();
        Ok(())
    }

    fn as_str(&self) -> &str {
        &self.text
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.text.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("12.12.1970").unwrap();
        assert_eq!(birthday.as_str(), "12.12.1970");
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1970, 12, 12).unwrap());
    }

    #[test]
    fn test_birthday_rejects_impossible_date() {
        assert!(Birthday::new("30.02.2020").is_err());
        assert!(Birthday::new("29.02.2021").is_err());
        assert!(Birthday::new("32.01.2020").is_err());
        assert!(Birthday::new("01.13.2020").is_err());
    }

    #[test]
    fn test_birthday_rejects_wrong_shape() {
        for bad in [
            "1.1.2020",
            "01.1.2020",
            "01.01.20",
            "01/01/2020",
            "01-01-2020",
            "2020.01.01",
            " 01.01.2020",
            "01.01.2020 ",
            "",
        ] {
            assert_eq!(
                Birthday::new(bad),
                Err(ValidationError::InvalidBirthday(bad.to_string())),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_birthday_accepts_leap_day() {
        assert!(Birthday::new("29.02.2020").is_ok());
    }

    #[test]
    fn test_anniversary_leap_day_rolls_to_march_first() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(
            birthday.anniversary_in(2023),
            NaiveDate::from_ymd_opt(2023, 3, 1)
        );
        assert_eq!(
            birthday.anniversary_in(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn test_birthday_set_value() {
        let mut birthday = Birthday::new("12.12.1970").unwrap();
        assert!(birthday.set_value("12/12/1971").is_err());
        assert_eq!(birthday.as_str(), "12.12.1970");

        birthday.set_value("01.05.1985").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1985, 5, 1).unwrap());
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("12.12.1970").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"12.12.1970\"");

        let back: Birthday = serde_json::from_str("\"12.12.1970\"").unwrap();
        assert_eq!(back, birthday);

        let bad: Result<Birthday, _> = serde_json::from_str("\"30.02.2020\"");
        assert!(bad.is_err());
    }
}
