use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ContactData;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn get_contact(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(contact_id): Path<String>,
) -> Result<ApiSuccess<ContactData>, ApiError> {
    let contact_id =
        ContactId::from_string(&contact_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .contact_service
        .get_contact(&user.id, &contact_id)
        .await
        .map_err(ApiError::from)
        .map(|ref contact| ApiSuccess::new(StatusCode::OK, contact.into()))
}
