use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ContactData;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// Contacts whose birthday falls in the next seven days, today
/// included, soonest first.
pub async fn birthdays(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<ApiSuccess<Vec<ContactData>>, ApiError> {
    state
        .contact_service
        .upcoming_birthdays(&user.id)
        .await
        .map_err(ApiError::from)
        .map(|contacts| {
            let data = contacts.iter().map(ContactData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
