use axum::extract::Path;
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
use crate::domain::contact::models::ContactId;
use crate::domain::contact::models::ContactName;
use crate::domain::contact::models::PhoneNumber;
use crate::domain::contact::models::UpdateContactCommand;
use crate::domain::contact::ports::ContactServicePort;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;
use crate::user::errors::EmailError;

pub async fn update_contact(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(contact_id): Path<String>,
    Json(body): Json<UpdateContactRequest>,
) -> Result<ApiSuccess<ContactData>, ApiError> {
    let contact_id =
        ContactId::from_string(&contact_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .contact_service
        .update_contact(&user.id, &contact_id, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::OK, contact.into()))
}

/// HTTP request body for replacing a contact (raw JSON).
///
/// Full replacement: omitting `info` clears it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateContactRequest {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    birthday: NaiveDate,
    info: Option<String>,
}

#[derive(Debug, Clone, Error)]
enum ParseUpdateContactRequestError {
    #[error("Invalid name: {0}")]
    Name(#[from] ContactNameError),

    #[error("Invalid email: {0}")]
    Email(#[from] EmailError),

    #[error("Invalid phone: {0}")]
    Phone(#[from] PhoneNumberError),
}

impl UpdateContactRequest {
    fn try_into_command(self) -> Result<UpdateContactCommand, ParseUpdateContactRequestError> {
        Ok(UpdateContactCommand {
            first_name: ContactName::new(self.first_name)?,
            last_name: ContactName::new(self.last_name)?,
            email: EmailAddress::new(self.email)?,
            phone: PhoneNumber::new(self.phone)?,
            birthday: self.birthday,
            info: self.info,
        })
    }
}

impl From<ParseUpdateContactRequestError> for ApiError {
    fn from(err: ParseUpdateContactRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
