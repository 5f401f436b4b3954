use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::contacts::birthdays::birthdays;
use super::handlers::contacts::create_contact::create_contact;
use super::handlers::contacts::delete_contact::delete_contact;
use super::handlers::contacts::get_contact::get_contact;
use super::handlers::contacts::list_contacts::list_contacts;
use super::handlers::contacts::update_contact::update_contact;
use super::handlers::forgot_password::forgot_password;
use super::handlers::get_me::get_me;
use super::handlers::health::health;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::refresh::refresh;
use super::handlers::request_verification::request_verification;
use super::handlers::reset_password::reset_password;
use super::handlers::signup::signup;
use super::handlers::update_avatar::update_avatar;
use super::handlers::verify_email::verify_email;
use super::middleware::authenticate;
use super::middleware::require_admin;
use crate::domain::auth::service::AuthService;
use crate::domain::contact::service::ContactService;
use crate::domain::user::service::UserService;
use crate::outbound::avatars::FsAvatarStore;
use crate::outbound::email::TracingEmailDispatcher;
use crate::outbound::repositories::contact::PostgresContactRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PostgresUserRepository, TracingEmailDispatcher>>,
    pub user_service: Arc<UserService<PostgresUserRepository, FsAvatarStore>>,
    pub contact_service: Arc<ContactService<PostgresContactRepository>>,
    pub db_pool: PgPool,
}

pub fn create_router(
    auth_service: Arc<AuthService<PostgresUserRepository, TracingEmailDispatcher>>,
    user_service: Arc<UserService<PostgresUserRepository, FsAvatarStore>>,
    contact_service: Arc<ContactService<PostgresContactRepository>>,
    db_pool: PgPool,
) -> Router {
    let state = AppState {
        auth_service,
        user_service,
        contact_service,
        db_pool,
    };

    let public_routes = Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/refresh", post(refresh))
        .route("/api/auth/verify/:token", get(verify_email))
        .route("/api/auth/request-verification", post(request_verification))
        .route("/api/auth/forgot-password", post(forgot_password))
        .route("/api/auth/reset-password", post(reset_password))
        .route("/api/health", get(health));

    let admin_routes = Router::new()
        .route("/api/users/avatar", patch(update_avatar))
        .route_layer(middleware::from_fn(require_admin));

    // route_layer runs after merge, so the admin routes sit behind
    // authenticate first and require_admin second
    let protected_routes = Router::new()
        .route("/api/auth/logout", post(logout))
        .route("/api/users/me", get(get_me))
        .route("/api/contacts", post(create_contact))
        .route("/api/contacts", get(list_contacts))
        .route("/api/contacts/birthdays", get(birthdays))
        .route("/api/contacts/:contact_id", get(get_contact))
        .route("/api/contacts/:contact_id", put(update_contact))
        .route("/api/contacts/:contact_id", delete(delete_contact))
        .merge(admin_routes)
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                headers = ?request.headers(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
