use thiserror::Error;

use crate::domain::user::errors::EmailError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactIdError {
    #[error("Invalid contact ID format: {0}")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactNameError {
    #[error("Name cannot be empty")]
    Empty,
    #[error("Name cannot exceed {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneNumberError {
    #[error("Phone number cannot be empty")]
    Empty,
    #[error("Phone number cannot exceed {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Errors that can occur during contact operations.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error(transparent)]
    InvalidContactId(#[from] ContactIdError),

    #[error(transparent)]
    InvalidName(#[from] ContactNameError),

    #[error(transparent)]
    InvalidEmail(#[from] EmailError),

    #[error(transparent)]
    InvalidPhone(#[from] PhoneNumberError),

    /// No contact with this ID in the caller's address book. Covers
    /// both a missing row and a row owned by someone else.
    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Contact with email {0} already exists in this address book")]
    EmailInUse(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ContactError {
    fn from(err: anyhow::Error) -> Self {
        ContactError::Unknown(err.to_string())
    }
}
