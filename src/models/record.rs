//! Record model representing one contact in the book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{CommandError, CommandResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// The name is immutable after creation. Phones keep insertion order and
/// duplicates are allowed; every stored phone is individually valid by
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone. Duplicates are permitted.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(value)?);
        Ok(())
    }

    /// First phone with an exact string match, if any.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Remove the first phone matching `value`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::PhoneNotFound` if no phone matches.
    pub fn remove_phone(&mut self, value: &str) -> CommandResult<Phone> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == value)
            .ok_or_else(|| CommandError::PhoneNotFound(value.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Replace `old` with a validated `new` phone.
    ///
    /// The new phone is appended, so order is not preserved.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::PhoneNotFound` if `old` is not present, or
    /// a validation error if `new` is malformed. Validation runs before
    /// removal, so a failed edit leaves the record unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        if self.find_phone(old).is_none() {
            return Err(CommandError::PhoneNotFound(old.to_string()));
        }
        let new = Phone::new(new)?;
        self.remove_phone(old)?;
        self.phones.push(new);
        Ok(())
    }

    /// Set or replace the birthday from an ISO `YYYY-MM-DD` string.
    pub fn set_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }

    /// Days until the next occurrence of the birthday, relative to the
    /// local current date. `None` if no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday's
    /// month/day. Zero when the birthday is today; never negative.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .map(|b| (b.next_occurrence(today) - today).num_days())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
