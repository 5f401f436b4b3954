use std::fmt;

use chrono::DateTime;
use chrono::Datelike;
use chrono::Days;
use chrono::NaiveDate;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::contact::errors::ContactIdError;
use crate::domain::contact::errors::ContactNameError;
use crate::domain::contact::errors::PhoneNumberError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;

/// Contact aggregate entity.
///
/// A single entry in one user's address book. Contacts never outlive
/// their owner and are only ever visible to that owner.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: ContactId,
    pub owner_id: UserId,
    pub first_name: ContactName,
    pub last_name: ContactName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub birthday: NaiveDate,
    pub info: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Contact unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(pub Uuid);

impl ContactId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a contact ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed ContactId
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ContactIdError> {
        Uuid::parse_str(s)
            .map(ContactId)
            .map_err(|e| ContactIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Person name value type
///
/// Trims surrounding whitespace. Bounded at 50 characters to match the
/// storage column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    const MAX_LENGTH: usize = 50;

    /// Create a new valid contact name.
    ///
    /// # Arguments
    /// * `name` - Raw name string
    ///
    /// # Errors
    /// * `Empty` - Name is empty after trimming
    /// * `TooLong` - Name longer than 50 characters
    pub fn new(name: String) -> Result<Self, ContactNameError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ContactNameError::Empty);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ContactNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Phone number value type
///
/// Bounded at 12 characters to match the storage column. No format
/// validation beyond length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    const MAX_LENGTH: usize = 12;

    /// Create a new valid phone number.
    ///
    /// # Arguments
    /// * `phone` - Raw phone string
    ///
    /// # Errors
    /// * `Empty` - Phone is empty after trimming
    /// * `TooLong` - Phone longer than 12 characters
    pub fn new(phone: String) -> Result<Self, PhoneNumberError> {
        let trimmed = phone.trim();
        if trimmed.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(PhoneNumberError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get phone as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to add a contact, with domain types
#[derive(Debug)]
pub struct CreateContactCommand {
    pub first_name: ContactName,
    pub last_name: ContactName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub birthday: NaiveDate,
    pub info: Option<String>,
}

/// Command to replace a contact's fields, with domain types.
///
/// Updates are full replacements. Every field is required and `info`
/// set to `None` clears any stored note.
#[derive(Debug)]
pub struct UpdateContactCommand {
    pub first_name: ContactName,
    pub last_name: ContactName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub birthday: NaiveDate,
    pub info: Option<String>,
}

/// Month-day codes (month * 100 + day) for every calendar day in the
/// window starting at `from`, inclusive of both ends.
///
/// The codes identify birthdays regardless of year, so "next week"
/// matches people born in any year. A window crossing December 31
/// wraps into January, and February 29 appears only when the window's
/// own dates include it.
pub fn birthday_window_codes(from: NaiveDate, days: u32) -> Vec<i32> {
    (0..=u64::from(days))
        .filter_map(|offset| from.checked_add_days(Days::new(offset)))
        .map(|date| date.month() as i32 * 100 + date.day() as i32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_name_is_trimmed() {
        let name = ContactName::new("  Alice  ".to_string()).unwrap();

        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_contact_name_validation() {
        assert!(ContactName::new("Bob".to_string()).is_ok());
        assert!(matches!(
            ContactName::new("   ".to_string()),
            Err(ContactNameError::Empty)
        ));
        assert!(matches!(
            ContactName::new("x".repeat(51)),
            Err(ContactNameError::TooLong { .. })
        ));
    }

    #[test]
    fn test_phone_number_validation() {
        assert!(PhoneNumber::new("+15550101".to_string()).is_ok());
        assert!(matches!(
            PhoneNumber::new("".to_string()),
            Err(PhoneNumberError::Empty)
        ));
        assert!(matches!(
            PhoneNumber::new("+15550101234567".to_string()),
            Err(PhoneNumberError::TooLong { .. })
        ));
    }

    #[test]
    fn test_birthday_window_within_one_month() {
        let from = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        let codes = birthday_window_codes(from, 7);

        assert_eq!(codes, vec![610, 611, 612, 613, 614, 615, 616, 617]);
    }

    #[test]
    fn test_birthday_window_wraps_over_new_year() {
        let from = NaiveDate::from_ymd_opt(2023, 12, 28).unwrap();

        let codes = birthday_window_codes(from, 7);

        assert_eq!(codes, vec![1228, 1229, 1230, 1231, 101, 102, 103, 104]);
    }

    #[test]
    fn test_birthday_window_includes_leap_day_only_in_leap_years() {
        let leap = NaiveDate::from_ymd_opt(2024, 2, 26).unwrap();
        let common = NaiveDate::from_ymd_opt(2023, 2, 26).unwrap();

        assert_eq!(
            birthday_window_codes(leap, 7),
            vec![226, 227, 228, 229, 301, 302, 303, 304]
        );
        assert_eq!(
            birthday_window_codes(common, 7),
            vec![226, 227, 228, 301, 302, 303, 304, 305]
        );
    }
}
