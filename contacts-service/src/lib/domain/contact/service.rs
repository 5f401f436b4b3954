use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::CreateContactCommand;
use crate::domain::contact::models::UpdateContactCommand;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::contact::ports::ContactServicePort;
use crate::domain::user::models::UserId;

/// Length of the upcoming-birthdays window in days, today included.
const BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// Domain service implementation for address book operations.
///
/// Concrete implementation of ContactServicePort with dependency
/// injection. Owner scoping happens here and in the repository; rows
/// of other owners never reach a caller.
pub struct ContactService<CR>
where
    CR: ContactRepository,
{
    repository: Arc<CR>,
}

impl<CR> ContactService<CR>
where
    CR: ContactRepository,
{
    /// Create a new contact service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Contact persistence implementation
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> ContactServicePort for ContactService<CR>
where
    CR: ContactRepository,
{
    async fn create_contact(
        &self,
        owner_id: &UserId,
        command: CreateContactCommand,
    ) -> Result<Contact, ContactError> {
        let now = Utc::now();

        let contact = Contact {
            id: ContactId::new(),
            owner_id: *owner_id,
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            phone: command.phone,
            birthday: command.birthday,
            info: command.info,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(contact).await
    }

    async fn get_contact(
        &self,
        owner_id: &UserId,
        contact_id: &ContactId,
    ) -> Result<Contact, ContactError> {
        self.repository
            .find_by_id(owner_id, contact_id)
            .await?
            .ok_or_else(|| ContactError::NotFound(contact_id.to_string()))
    }

    async fn list_contacts(
        &self,
        owner_id: &UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, ContactError> {
        self.repository.list_by_owner(owner_id, limit, offset).await
    }

    async fn update_contact(
        &self,
        owner_id: &UserId,
        contact_id: &ContactId,
        command: UpdateContactCommand,
    ) -> Result<Contact, ContactError> {
        let existing = self
            .repository
            .find_by_id(owner_id, contact_id)
            .await?
            .ok_or_else(|| ContactError::NotFound(contact_id.to_string()))?;

        let updated = Contact {
            id: existing.id,
            owner_id: existing.owner_id,
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            phone: command.phone,
            birthday: command.birthday,
            info: command.info,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        self.repository.update(updated).await
    }

    async fn delete_contact(
        &self,
        owner_id: &UserId,
        contact_id: &ContactId,
    ) -> Result<(), ContactError> {
        self.repository.delete(owner_id, contact_id).await
    }

    async fn upcoming_birthdays(&self, owner_id: &UserId) -> Result<Vec<Contact>, ContactError> {
        let today = Utc::now().date_naive();

        self.repository
            .find_upcoming_birthdays(owner_id, today, BIRTHDAY_WINDOW_DAYS)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::mock;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::contact::models::ContactName;
    use crate::domain::contact::models::PhoneNumber;
    use crate::domain::user::models::EmailAddress;

    mock! {
        pub TestContactRepository {}

        #[async_trait]
        impl ContactRepository for TestContactRepository {
            async fn create(&self, contact: Contact) -> Result<Contact, ContactError>;
            async fn find_by_id(
                &self,
                owner_id: &UserId,
                id: &ContactId,
            ) -> Result<Option<Contact>, ContactError>;
            async fn list_by_owner(
                &self,
                owner_id: &UserId,
                limit: i64,
                offset: i64,
            ) -> Result<Vec<Contact>, ContactError>;
            async fn update(&self, contact: Contact) -> Result<Contact, ContactError>;
            async fn delete(&self, owner_id: &UserId, id: &ContactId) -> Result<(), ContactError>;
            async fn find_upcoming_birthdays(
                &self,
                owner_id: &UserId,
                from: NaiveDate,
                days: u32,
            ) -> Result<Vec<Contact>, ContactError>;
        }
    }

    fn create_command(first_name: &str, email: &str) -> CreateContactCommand {
        CreateContactCommand {
            first_name: ContactName::new(first_name.to_string()).unwrap(),
            last_name: ContactName::new("Smith".to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            phone: PhoneNumber::new("+15550101".to_string()).unwrap(),
            birthday: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            info: None,
        }
    }

    fn stored_contact(owner_id: UserId) -> Contact {
        let created_at = Utc::now() - chrono::Duration::days(30);
        Contact {
            id: ContactId::new(),
            owner_id,
            first_name: ContactName::new("Alice".to_string()).unwrap(),
            last_name: ContactName::new("Smith".to_string()).unwrap(),
            email: EmailAddress::new("alice@example.com".to_string()).unwrap(),
            phone: PhoneNumber::new("+15550101".to_string()).unwrap(),
            birthday: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            info: Some("met at work".to_string()),
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn test_create_contact_assigns_identity_and_timestamps() {
        let owner_id = UserId::new();
        let mut repository = MockTestContactRepository::new();

        repository
            .expect_create()
            .withf(move |contact| {
                contact.owner_id == owner_id && contact.first_name.as_str() == "Alice"
            })
            .times(1)
            .returning(|contact| Ok(contact));

        let service = ContactService::new(Arc::new(repository));

        let contact = service
            .create_contact(&owner_id, create_command("Alice", "alice@example.com"))
            .await
            .unwrap();

        assert_eq!(contact.owner_id, owner_id);
        assert_eq!(contact.created_at, contact.updated_at);
    }

    #[tokio::test]
    async fn test_create_contact_duplicate_email_is_email_in_use() {
        let owner_id = UserId::new();
        let mut repository = MockTestContactRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|contact| Err(ContactError::EmailInUse(contact.email.to_string())));

        let service = ContactService::new(Arc::new(repository));

        let result = service
            .create_contact(&owner_id, create_command("Alice", "alice@example.com"))
            .await;

        assert!(matches!(result.unwrap_err(), ContactError::EmailInUse(_)));
    }

    #[tokio::test]
    async fn test_get_contact_missing_is_not_found() {
        let owner_id = UserId::new();
        let contact_id = ContactId::new();
        let mut repository = MockTestContactRepository::new();

        repository
            .expect_find_by_id()
            .with(eq(owner_id), eq(contact_id))
            .times(1)
            .returning(|_, _| Ok(None));

        let service = ContactService::new(Arc::new(repository));

        let result = service.get_contact(&owner_id, &contact_id).await;

        assert!(matches!(result.unwrap_err(), ContactError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_contact_replaces_fields_and_preserves_identity() {
        let owner_id = UserId::new();
        let existing = stored_contact(owner_id);
        let contact_id = existing.id;
        let original_created_at = existing.created_at;

        let mut repository = MockTestContactRepository::new();

        let found = existing.clone();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(move |_, _| Ok(Some(found.clone())));
        repository
            .expect_update()
            .times(1)
            .returning(|contact| Ok(contact));

        let service = ContactService::new(Arc::new(repository));

        let command = UpdateContactCommand {
            first_name: ContactName::new("Alicia".to_string()).unwrap(),
            last_name: ContactName::new("Jones".to_string()).unwrap(),
            email: EmailAddress::new("alicia@example.com".to_string()).unwrap(),
            phone: PhoneNumber::new("+15550102".to_string()).unwrap(),
            birthday: NaiveDate::from_ymd_opt(1991, 7, 16).unwrap(),
            info: None,
        };

        let updated = service
            .update_contact(&owner_id, &contact_id, command)
            .await
            .unwrap();

        assert_eq!(updated.id, contact_id);
        assert_eq!(updated.owner_id, owner_id);
        assert_eq!(updated.created_at, original_created_at);
        assert!(updated.updated_at > original_created_at);
        assert_eq!(updated.first_name.as_str(), "Alicia");
        // Full replacement: the omitted note is cleared, not kept
        assert_eq!(updated.info, None);
    }

    #[tokio::test]
    async fn test_update_contact_missing_is_not_found() {
        let owner_id = UserId::new();
        let contact_id = ContactId::new();
        let mut repository = MockTestContactRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_, _| Ok(None));
        repository.expect_update().times(0);

        let service = ContactService::new(Arc::new(repository));

        let command = UpdateContactCommand {
            first_name: ContactName::new("Alicia".to_string()).unwrap(),
            last_name: ContactName::new("Jones".to_string()).unwrap(),
            email: EmailAddress::new("alicia@example.com".to_string()).unwrap(),
            phone: PhoneNumber::new("+15550102".to_string()).unwrap(),
            birthday: NaiveDate::from_ymd_opt(1991, 7, 16).unwrap(),
            info: None,
        };

        let result = service.update_contact(&owner_id, &contact_id, command).await;

        assert!(matches!(result.unwrap_err(), ContactError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_upcoming_birthdays_uses_seven_day_window() {
        let owner_id = UserId::new();
        let mut repository = MockTestContactRepository::new();

        repository
            .expect_find_upcoming_birthdays()
            .withf(move |id, _, days| *id == owner_id && *days == 7)
            .times(1)
            .returning(|_, _, _| Ok(vec![]));

        let service = ContactService::new(Arc::new(repository));

        let contacts = service.upcoming_birthdays(&owner_id).await.unwrap();

        assert!(contacts.is_empty());
    }
}
