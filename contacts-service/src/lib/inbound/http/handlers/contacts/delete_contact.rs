use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::contact::models::ContactId;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn delete_contact(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(contact_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let contact_id =
        ContactId::from_string(&contact_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .contact_service
        .delete_contact(&user.id, &contact_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
