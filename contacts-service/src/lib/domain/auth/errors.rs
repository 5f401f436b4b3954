use auth::TokenError;
use auth::TokenScope;
use thiserror::Error;

use crate::domain::user::errors::UserError;

/// Error for email dispatch operations
#[derive(Debug, Clone, Error)]
pub enum EmailDispatchError {
    #[error("Failed to dispatch email: {0}")]
    DispatchFailed(String),
}

/// Top-level error for authentication flows.
///
/// Every variant is recoverable by the caller. `InvalidCredentials`
/// never reveals whether the email or the password was wrong, while
/// `ExpiredToken` and `TokenRevoked` stay distinct so clients can tell
/// a stale session from a stolen one.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email address not verified")]
    NotVerified,

    #[error("Email address already verified")]
    AlreadyVerified,

    #[error("Token is invalid: {0}")]
    InvalidToken(String),

    #[error("Token is expired")]
    ExpiredToken,

    #[error("Expected a {expected} token, got a {actual} token")]
    WrongTokenClass {
        expected: TokenScope,
        actual: TokenScope,
    },

    #[error("Refresh token has been revoked")]
    TokenRevoked,

    #[error("User not found: {0}")]
    UserNotFound(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<TokenError> for AuthError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidToken(msg) => AuthError::InvalidToken(msg),
            TokenError::ExpiredToken => AuthError::ExpiredToken,
            TokenError::WrongTokenClass { expected, actual } => {
                AuthError::WrongTokenClass { expected, actual }
            }
            TokenError::EncodingFailed(msg) => AuthError::Unknown(msg),
        }
    }
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AuthError::UserNotFound(id),
            UserError::EmailAlreadyExists(email) => AuthError::EmailTaken(email),
            UserError::UsernameAlreadyExists(username) => AuthError::UsernameTaken(username),
            UserError::DatabaseError(msg) => AuthError::DatabaseError(msg),
            other => AuthError::Unknown(other.to_string()),
        }
    }
}
