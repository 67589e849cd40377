//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Custom deserializer for phones that drops repeated numbers, keeping the first.
fn deserialize_unique_phones<'de, D>(deserializer: D) -> Result<Vec<Phone>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Vec<Phone> = Vec::deserialize(deserializer)?;
    let mut phones: Vec<Phone> = Vec::with_capacity(entries.len());
    for phone in entries {
        if !phones.contains(&phone) {
            phones.push(phone);
        }
    }
    Ok(phones)
}

/// A contact: a name, an ordered list of distinct phones, and an optional birthday.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Contact name, also the key of the record in the address book
    name: Name,

    /// Phone numbers in insertion order, no duplicates
    #[serde(default, deserialize_with = "deserialize_unique_phones")]
    phones: Vec<Phone>,

    /// Birthday, if known
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record, optionally with one phone and a birthday.
    ///
    /// The name is validated first, so a bad name fails before any other field.
    ///
    /// # Example
    ///
    /// ```
    /// use contact_book::Record;
    ///
    /// let record = Record::new("Oleg", Some("0135433568"), Some("12.12.1970")).unwrap();
    /// assert_eq!(record.name().as_str(), "Oleg");
    /// assert_eq!(record.phones().len(), 1);
    /// ```
    pub fn new(
        name: &str,
        phone: Option<&str>,
        birthday: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let name = Name::new(name)?;
        let birthday = birthday.map(Birthday::new).transpose()?;
        let phones = match phone {
            Some(phone) => vec![Phone::new(phone)?],
            None => Vec::new(),
        };

        Ok(Self {
            name,
            phones,
            birthday,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone number. Adding a number the record already has is a no-op.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = Phone::new(phone)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    /// Remove every phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace `old` with `new`.
    ///
    /// The replacement goes to the end of the list; callers must not rely on
    /// positions surviving an edit. On error the phones are left untouched.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old` is not on the record
    /// - `BookError::Validation` if `new` is not a valid phone
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        if self.find_phone(old).is_none() {
            return Err(BookError::PhoneNotFound(old.to_string()));
        }
        let new = Phone::new(new)?;

        self.remove_phone(old);
        if !self.phones.contains(&new) {
            self.phones.push(new);
        }
        Ok(())
    }

    /// First phone whose value equals `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    pub fn remove_birthday(&mut self) {
        self.birthday = None;
    }

    /// Days from today (local time) until the next birthday.
    pub fn days_to_next_birthday(&self) -> Option<i64> {
        self.days_to_next_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday, or `None` without a birthday.
    ///
    /// A birthday falling on `today` is 0 days away.
    pub fn days_to_next_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;

        let mut next = birthday.anniversary_in(today.year())?;
        if next < today {
            next = birthday.anniversary_in(today.year() + 1)?;
        }

        Some((next - today).num_days())
    }

    /// Render the record as shown to the user, counting days from `today`.
    pub fn summary_on(&self, today: NaiveDate) -> String {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        let mut summary = format!("Contact name: {}, phones: {}", self.name, phones);
        if let (Some(birthday), Some(days)) =
            (&self.birthday, self.days_to_next_birthday_from(today))
        {
            summary.push_str(&format!(
                ", birthday: {} and {} days left until the next!",
                birthday, days
            ));
        }
        summary
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary_on(Local::now().date_naive()))
    }
}
