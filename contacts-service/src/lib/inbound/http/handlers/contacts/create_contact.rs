use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use super::ContactData;
use crate::contact::errors::ContactNameError;
use crate::contact::errors::PhoneNumberError;
use crate::domain::contact::models::ContactName;
use crate::domain::contact::models::CreateContactCommand;
use crate::domain::contact::models::PhoneNumber;
use crate::domain::contact::ports::ContactServicePort;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;

pub async fn create_contact(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(body): Json<CreateContactRequest>,
) -> Result<ApiSuccess<ContactData>, ApiError> {
    state
        .contact_service
        .create_contact(&user.id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::CREATED, contact.into()))
}

/// HTTP request body for adding a contact (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateContactRequest {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    birthday: NaiveDate,
    info: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateContactRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] ContactNameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid phone: {0}")]
    Phone(#[from] PhoneNumberError),
}

impl CreateContactRequest {
    fn try_into_command(self) -> Result<CreateContactCommand, ParseCreateContactRequestError> {
        Ok(CreateContactCommand {
            first_name: ContactName::new(self.first_name)?,
            last_name: ContactName::new(self.last_name)?,
            email: EmailAddress::new(self.email)?,
            phone: PhoneNumber::new(self.phone)?,
            birthday: self.birthday,
            info: self.info,
        })
    }
}

impl From<ParseCreateContactRequestError> for ApiError {
    fn from(err: ParseCreateContactRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
