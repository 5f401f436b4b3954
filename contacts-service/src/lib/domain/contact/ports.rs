use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::CreateContactCommand;
use crate::domain::contact::models::UpdateContactCommand;
use crate::domain::user::models::UserId;

/// Port for contact service operations.
///
/// Every operation is scoped to an owner. A contact belonging to a
/// different user is indistinguishable from one that does not exist.
#[async_trait]
pub trait ContactServicePort: Send + Sync + 'static {
    /// Add a contact to the owner's address book.
    ///
    /// # Arguments
    /// * `owner_id` - Address book owner
    /// * `command` - Validated contact fields
    ///
    /// # Returns
    /// The stored contact with its generated ID and timestamps
    ///
    /// # Errors
    /// * `EmailInUse` - Owner already has a contact with this email
    /// * `DatabaseError` - Storage operation failed
    async fn create_contact(
        &self,
        owner_id: &UserId,
        command: CreateContactCommand,
    ) -> Result<Contact, ContactError>;

    /// Fetch a single contact from the owner's address book.
    ///
    /// # Errors
    /// * `NotFound` - No such contact for this owner
    /// * `DatabaseError` - Storage operation failed
    async fn get_contact(
        &self,
        owner_id: &UserId,
        contact_id: &ContactId,
    ) -> Result<Contact, ContactError>;

    /// List the owner's contacts, newest first.
    ///
    /// # Arguments
    /// * `owner_id` - Address book owner
    /// * `limit` - Maximum number of contacts to return
    /// * `offset` - Number of contacts to skip
    async fn list_contacts(
        &self,
        owner_id: &UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, ContactError>;

    /// Replace every field of an existing contact.
    ///
    /// The contact's ID, owner and creation time are preserved;
    /// `updated_at` is advanced.
    ///
    /// # Errors
    /// * `NotFound` - No such contact for this owner
    /// * `EmailInUse` - New email collides with another contact
    /// * `DatabaseError` - Storage operation failed
    async fn update_contact(
        &self,
        owner_id: &UserId,
        contact_id: &ContactId,
        command: UpdateContactCommand,
    ) -> Result<Contact, ContactError>;

    /// Remove a contact from the owner's address book.
    ///
    /// # Errors
    /// * `NotFound` - No such contact for this owner
    /// * `DatabaseError` - Storage operation failed
    async fn delete_contact(
        &self,
        owner_id: &UserId,
        contact_id: &ContactId,
    ) -> Result<(), ContactError>;

    /// List the owner's contacts whose birthday falls within the next
    /// seven days, today included, matching by month and day only.
    async fn upcoming_birthdays(&self, owner_id: &UserId) -> Result<Vec<Contact>, ContactError>;
}

/// Port for contact persistence operations.
#[async_trait]
pub trait ContactRepository: Send + Sync + 'static {
    /// Persist a new contact to storage.
    ///
    /// # Errors
    /// * `EmailInUse` - Owner already has a contact with this email
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, contact: Contact) -> Result<Contact, ContactError>;

    /// Find a contact by ID within one owner's address book.
    ///
    /// # Returns
    /// The contact if it exists and belongs to the owner, None otherwise
    async fn find_by_id(
        &self,
        owner_id: &UserId,
        id: &ContactId,
    ) -> Result<Option<Contact>, ContactError>;

    /// List an owner's contacts ordered by creation time, newest first.
    async fn list_by_owner(
        &self,
        owner_id: &UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, ContactError>;

    /// Replace a stored contact's fields with the given entity's.
    ///
    /// Matches on the contact's ID and owner.
    ///
    /// # Errors
    /// * `NotFound` - No such contact for this owner
    /// * `EmailInUse` - New email collides with another contact
    /// * `DatabaseError` - Storage operation failed
    async fn update(&self, contact: Contact) -> Result<Contact, ContactError>;

    /// Delete a contact from one owner's address book.
    ///
    /// # Errors
    /// * `NotFound` - No such contact for this owner
    /// * `DatabaseError` - Storage operation failed
    async fn delete(&self, owner_id: &UserId, id: &ContactId) -> Result<(), ContactError>;

    /// Find an owner's contacts whose birthday month and day fall
    /// within the window starting at `from`, inclusive of both ends.
    async fn find_upcoming_birthdays(
        &self,
        owner_id: &UserId,
        from: NaiveDate,
        days: u32,
    ) -> Result<Vec<Contact>, ContactError>;
}
