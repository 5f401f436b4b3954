use thiserror::Error;

use super::claims::TokenScope;

/// Error type for token operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid: {0}")]
    InvalidToken(String),

    #[error("Token is expired")]
    ExpiredToken,

    #[error("Expected a {expected} token, got a {actual} token")]
    WrongTokenClass {
        expected: TokenScope,
        actual: TokenScope,
    },
}
