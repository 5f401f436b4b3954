use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::EmailAddress;
use crate::inbound::http::router::AppState;

pub async fn request_verification(
    State(state): State<AppState>,
    Json(body): Json<RequestVerificationRequest>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let email =
        EmailAddress::new(body.email).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    // The response body is the same whether or not the address has an
    // account
    state
        .auth_service
        .request_verification(&email)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageData::new("Check your email for a verification link"),
            )
        })
}

/// HTTP request body for re-requesting a verification email (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestVerificationRequest {
    email: String,
}
