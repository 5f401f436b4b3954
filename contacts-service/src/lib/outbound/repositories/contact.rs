use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::birthday_window_codes;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::ContactName;
use crate::domain::contact::models::PhoneNumber;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;

pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_contact(row: &PgRow) -> Result<Contact, ContactError> {
        Ok(Contact {
            id: ContactId(row.get("id")),
            owner_id: UserId(row.get("owner_id")),
            first_name: ContactName::new(row.get("first_name"))?,
            last_name: ContactName::new(row.get("last_name"))?,
            email: EmailAddress::new(row.get("email"))?,
            phone: PhoneNumber::new(row.get("phone"))?,
            birthday: row.get("birthday"),
            info: row.get("info"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn create(&self, contact: Contact) -> Result<Contact, ContactError> {
        sqlx::query(
            r#"
            INSERT INTO contacts (id, owner_id, first_name, last_name, email, phone,
                                  birthday, info, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(contact.id.0)
        .bind(contact.owner_id.0)
        .bind(contact.first_name.as_str())
        .bind(contact.last_name.as_str())
        .bind(contact.email.as_str())
        .bind(contact.phone.as_str())
        .bind(contact.birthday)
        .bind(&contact.info)
        .bind(contact.created_at)
        .bind(contact.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("contacts_owner_id_email_key")
                {
                    return ContactError::EmailInUse(contact.email.as_str().to_string());
                }
            }
            ContactError::DatabaseError(e.to_string())
        })?;

        Ok(contact)
    }

    async fn find_by_id(
        &self,
        owner_id: &UserId,
        id: &ContactId,
    ) -> Result<Option<Contact>, ContactError> {
        let row = sqlx::query(
            r#"
            SELECT id, owner_id, first_name, last_name, email, phone,
                   birthday, info, created_at, updated_at
            FROM contacts
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner_id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        match row {
            Some(r) => Ok(Some(Self::row_to_contact(&r)?)),
            None => Ok(None),
        }
    }

    async fn list_by_owner(
        &self,
        owner_id: &UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Contact>, ContactError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, first_name, last_name, email, phone,
                   birthday, info, created_at, updated_at
            FROM contacts
            WHERE owner_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(owner_id.0)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_contact).collect()
    }

    async fn update(&self, contact: Contact) -> Result<Contact, ContactError> {
        let result = sqlx::query(
            r#"
            UPDATE contacts
            SET first_name = $3, last_name = $4, email = $5, phone = $6,
                birthday = $7, info = $8, updated_at = $9
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(contact.id.0)
        .bind(contact.owner_id.0)
        .bind(contact.first_name.as_str())
        .bind(contact.last_name.as_str())
        .bind(contact.email.as_str())
        .bind(contact.phone.as_str())
        .bind(contact.birthday)
        .bind(&contact.info)
        .bind(contact.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("contacts_owner_id_email_key")
                {
                    return ContactError::EmailInUse(contact.email.as_str().to_string());
                }
            }
            ContactError::DatabaseError(e.to_string())
        })?;

        if result.rows_affected() == 0 {
            return Err(ContactError::NotFound(contact.id.to_string()));
        }

        Ok(contact)
    }

    async fn delete(&self, owner_id: &UserId, id: &ContactId) -> Result<(), ContactError> {
        let result = sqlx::query(
            r#"
            DELETE FROM contacts
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner_id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ContactError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn find_upcoming_birthdays(
        &self,
        owner_id: &UserId,
        from: NaiveDate,
        days: u32,
    ) -> Result<Vec<Contact>, ContactError> {
        // Month-day codes match birthdays in any birth year, and the
        // window order survives a December-to-January wrap
        let codes = birthday_window_codes(from, days);

        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, first_name, last_name, email, phone,
                   birthday, info, created_at, updated_at
            FROM contacts
            WHERE owner_id = $1
              AND EXTRACT(MONTH FROM birthday)::int * 100 + EXTRACT(DAY FROM birthday)::int = ANY($2)
            ORDER BY array_position(
                $2,
                EXTRACT(MONTH FROM birthday)::int * 100 + EXTRACT(DAY FROM birthday)::int
            )
            "#,
        )
        .bind(owner_id.0)
        .bind(&codes)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ContactError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_contact).collect()
    }
}
