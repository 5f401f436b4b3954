use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Liveness probe that also round-trips the database.
pub async fn health(State(state): State<AppState>) -> Result<ApiSuccess<HealthData>, ApiError> {
    sqlx::query("SELECT 1")
        .execute(&state.db_pool)
        .await
        .map_err(|e| ApiError::InternalServerError(format!("Database unreachable: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        HealthData {
            status: "ok".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthData {
    pub status: String,
}
