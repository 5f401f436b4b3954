use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Extension;
use axum::Json;
use serde_json::json;

use crate::domain::auth::ports::AuthServicePort;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated account through request
/// extensions. Loaded fresh from the store on every request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that resolves the bearer token to an account and adds it
/// to request extensions.
///
/// Every failure mode collapses to 401 here, including a token whose
/// account has since been deleted. Downstream handlers only ever see
/// requests with a live account attached.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let user = state.auth_service.authenticate(token).await.map_err(|e| {
        tracing::warn!("Authentication failed: {}", e);
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid or expired token"
            })),
        )
            .into_response()
    })?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

/// Middleware that requires the authenticated account to hold the
/// admin role. Runs after `authenticate`, so the role checked here is
/// the stored one, not the token claim.
pub async fn require_admin(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    if !user.role.permits(Role::Admin) {
        tracing::warn!("User {} denied admin-only access", user.id);
        return Err((
            StatusCode::FORBIDDEN,
            Json(json!({
                "error": "Admin privileges required"
            })),
        )
            .into_response());
    }

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "error": "Missing Authorization header"
                })),
            )
                .into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid Authorization header"
            })),
        )
            .into_response()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "Invalid Authorization header format. Expected: Bearer <token>"
            })),
        )
            .into_response()
    })
}
