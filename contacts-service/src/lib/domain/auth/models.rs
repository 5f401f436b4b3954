use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Username;

/// Pair of bearer tokens handed out by login and refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Command to register a new account with domain types
#[derive(Debug)]
pub struct SignupCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: String,
}

impl SignupCommand {
    /// Construct a new signup command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `email` - Validated, normalized email address
    /// * `password` - Plain text password (will be hashed by service)
    pub fn new(username: Username, email: EmailAddress, password: String) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

/// Command to authenticate with email and password
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: EmailAddress, password: String) -> Self {
        Self { email, password }
    }
}
