use async_trait::async_trait;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::errors::EmailDispatchError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::SignupCommand;
use crate::domain::auth::models::TokenPair;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for the authentication flows.
///
/// Drives every account state transition: `{Unverified, Verified} x
/// {LoggedOut, LoggedIn}`, stepped by signup, email verification, login,
/// refresh, and logout.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// The account starts unverified; a verification email is dispatched
    /// best-effort and its failure never rolls the signup back.
    ///
    /// # Arguments
    /// * `command` - Validated username, email, and plaintext password
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `EmailTaken` - Email is already registered
    /// * `UsernameTaken` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn signup(&self, command: SignupCommand) -> Result<User, AuthError>;

    /// Exchange credentials for an access/refresh token pair.
    ///
    /// The credential check runs before the verification check, so a
    /// wrong password on an unverified account still reports
    /// `InvalidCredentials`.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Fresh token pair; the refresh token's hash is stored
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `NotVerified` - Credentials are correct but the email is unverified
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<TokenPair, AuthError>;

    /// Exchange a refresh token for a new token pair (rotation).
    ///
    /// Signature and expiry are checked before the stored-hash
    /// comparison, so an expired token always reports `ExpiredToken`,
    /// never `TokenRevoked`.
    ///
    /// # Arguments
    /// * `refresh_token` - Refresh token presented by the client
    ///
    /// # Returns
    /// Fresh token pair; the stored hash is overwritten
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature or malformed token
    /// * `ExpiredToken` - Token is past its expiry
    /// * `WrongTokenClass` - Token is not of the refresh class
    /// * `UserNotFound` - Subject no longer exists
    /// * `TokenRevoked` - Token does not match the stored hash
    /// * `DatabaseError` - Database operation failed
    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;

    /// Invalidate the user's refresh token. Idempotent.
    ///
    /// # Arguments
    /// * `user_id` - User to log out
    ///
    /// # Errors
    /// * `UserNotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn logout(&self, user_id: &UserId) -> Result<(), AuthError>;

    /// Mark the token's subject as verified. Idempotent: verifying an
    /// already-verified account succeeds without touching the store.
    ///
    /// # Arguments
    /// * `token` - Email-verification token
    ///
    /// # Errors
    /// * `InvalidToken` / `ExpiredToken` / `WrongTokenClass` - Token rejected
    /// * `UserNotFound` - Subject no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn verify_email(&self, token: &str) -> Result<(), AuthError>;

    /// Re-issue a verification email.
    ///
    /// An unknown email succeeds without any action, so the endpoint
    /// cannot be used to probe which addresses have accounts.
    ///
    /// # Arguments
    /// * `email` - Normalized email address
    ///
    /// # Errors
    /// * `AlreadyVerified` - Account is already verified
    /// * `DatabaseError` - Database operation failed
    async fn request_verification(&self, email: &EmailAddress) -> Result<(), AuthError>;

    /// Start the password-recovery flow by dispatching a reset email.
    ///
    /// # Arguments
    /// * `email` - Normalized email address
    ///
    /// # Errors
    /// * `UserNotFound` - No account with this email
    /// * `NotVerified` - Account email is not verified
    /// * `DatabaseError` - Database operation failed
    async fn forgot_password(&self, email: &EmailAddress) -> Result<(), AuthError>;

    /// Complete the password-recovery flow.
    ///
    /// Stores the new password hash and clears the refresh-token hash in
    /// the same update, so sessions issued under the old password die
    /// with it.
    ///
    /// # Arguments
    /// * `token` - Reset token (email-verification class)
    /// * `new_password` - Plaintext replacement password
    ///
    /// # Errors
    /// * `InvalidToken` / `ExpiredToken` / `WrongTokenClass` - Token rejected
    /// * `UserNotFound` - Subject no longer exists
    /// * `NotVerified` - Account email is not verified
    /// * `DatabaseError` - Database operation failed
    async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AuthError>;

    /// Resolve the current user from an access token.
    ///
    /// Authorization decisions downstream use the role on the returned
    /// user, freshly loaded from the store, not the role embedded in the
    /// token.
    ///
    /// # Arguments
    /// * `access_token` - Bearer token from the Authorization header
    ///
    /// # Returns
    /// The user the token was issued to
    ///
    /// # Errors
    /// * `InvalidToken` / `ExpiredToken` / `WrongTokenClass` - Token rejected
    /// * `UserNotFound` - Account has been removed since issuance
    /// * `DatabaseError` - Database operation failed
    async fn authenticate(&self, access_token: &str) -> Result<User, AuthError>;
}

/// Outgoing email seam. Implementations must not block the calling flow
/// on delivery; callers treat failures as log-and-continue.
#[async_trait]
pub trait EmailDispatcher: Send + Sync + 'static {
    /// Send the address-verification email.
    ///
    /// # Arguments
    /// * `email` - Recipient address
    /// * `username` - Recipient display name
    /// * `token` - Verification token to embed in the link
    ///
    /// # Errors
    /// * `DispatchFailed` - Email could not be handed off
    async fn send_verification(
        &self,
        email: &EmailAddress,
        username: &Username,
        token: &str,
    ) -> Result<(), EmailDispatchError>;

    /// Send the password-reset email.
    ///
    /// # Arguments
    /// * `email` - Recipient address
    /// * `username` - Recipient display name
    /// * `token` - Reset token to embed in the link
    ///
    /// # Errors
    /// * `DispatchFailed` - Email could not be handed off
    async fn send_password_reset(
        &self,
        email: &EmailAddress,
        username: &Username,
        token: &str,
    ) -> Result<(), EmailDispatchError>;
}
