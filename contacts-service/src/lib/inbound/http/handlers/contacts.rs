use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;

use crate::domain::contact::models::Contact;

pub mod birthdays;
pub mod create_contact;
pub mod delete_contact;
pub mod get_contact;
pub mod list_contacts;
pub mod update_contact;

/// Contact representation returned by every address book endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub birthday: NaiveDate,
    pub info: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Contact> for ContactData {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            first_name: contact.first_name.as_str().to_string(),
            last_name: contact.last_name.as_str().to_string(),
            email: contact.email.as_str().to_string(),
            phone: contact.phone.as_str().to_string(),
            birthday: contact.birthday,
            info: contact.info.clone(),
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}
