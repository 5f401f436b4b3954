use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ContactData;
use crate::domain::contact::ports::ContactServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 500;

pub async fn list_contacts(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(params): Query<ListContactsQuery>,
) -> Result<ApiSuccess<Vec<ContactData>>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    state
        .contact_service
        .list_contacts(&user.id, limit, offset)
        .await
        .map_err(ApiError::from)
        .map(|contacts| {
            let data = contacts.iter().map(ContactData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}

/// Pagination parameters for listing contacts
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListContactsQuery {
    limit: Option<i64>,
    offset: Option<i64>,
}
