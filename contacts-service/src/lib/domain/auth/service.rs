use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenScope;
use auth::TokenService;
use chrono::Utc;
use sha2::Digest;
use sha2::Sha256;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::SignupCommand;
use crate::domain::auth::models::TokenPair;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::EmailDispatcher;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Role;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for the authentication flows.
///
/// Concrete implementation of AuthServicePort with dependency injection.
/// The store is the single source of truth: every decision that depends
/// on account state (role, verification, stored refresh-token hash)
/// loads the user fresh rather than trusting token claims.
pub struct AuthService<UR, ED>
where
    UR: UserRepository,
    ED: EmailDispatcher,
{
    repository: Arc<UR>,
    email_dispatcher: Arc<ED>,
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

impl<UR, ED> AuthService<UR, ED>
where
    UR: UserRepository,
    ED: EmailDispatcher,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `email_dispatcher` - Outgoing email implementation
    /// * `token_service` - Configured token issuer/verifier
    pub fn new(repository: Arc<UR>, email_dispatcher: Arc<ED>, token_service: TokenService) -> Self {
        Self {
            repository,
            email_dispatcher,
            password_hasher: PasswordHasher::new(),
            token_service,
        }
    }

    /// Issue an access/refresh pair for the user and store the refresh
    /// token's hash. One update statement; under concurrent calls the
    /// last writer wins and earlier pairs die on their next refresh.
    async fn issue_session(&self, user: &User) -> Result<TokenPair, AuthError> {
        let subject = user.id.to_string();

        let access = self
            .token_service
            .issue_access_token(&subject, user.role.as_str())?;
        let refresh = self
            .token_service
            .issue_refresh_token(&subject, user.role.as_str())?;

        self.repository
            .update_refresh_token(&user.id, Some(hash_token(&refresh.token)))
            .await?;

        Ok(TokenPair {
            access_token: access.token,
            refresh_token: refresh.token,
        })
    }

    async fn load_subject(&self, sub: &str) -> Result<User, AuthError> {
        let user_id = UserId::from_string(sub).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        self.repository
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AuthError::UserNotFound(sub.to_string()))
    }

    /// Issue a verification token and hand it to the dispatcher.
    /// Best-effort: failures are logged and never surfaced to the caller.
    async fn dispatch_verification(&self, user: &User) {
        let token = match self.token_service.issue_verification_token(&user.id.to_string()) {
            Ok(issued) => issued.token,
            Err(e) => {
                tracing::error!(
                    "Failed to issue verification token for user {}: {}",
                    user.id,
                    e
                );
                return;
            }
        };

        if let Err(e) = self
            .email_dispatcher
            .send_verification(&user.email, &user.username, &token)
            .await
        {
            tracing::error!("Failed to send verification email to {}: {}", user.email, e);
        }
    }

    async fn dispatch_password_reset(&self, user: &User) {
        let token = match self.token_service.issue_verification_token(&user.id.to_string()) {
            Ok(issued) => issued.token,
            Err(e) => {
                tracing::error!("Failed to issue reset token for user {}: {}", user.id, e);
                return;
            }
        };

        if let Err(e) = self
            .email_dispatcher
            .send_password_reset(&user.email, &user.username, &token)
            .await
        {
            tracing::error!(
                "Failed to send password reset email to {}: {}",
                user.email,
                e
            );
        }
    }
}

#[async_trait]
impl<UR, ED> AuthServicePort for AuthService<UR, ED>
where
    UR: UserRepository,
    ED: EmailDispatcher,
{
    async fn signup(&self, command: SignupCommand) -> Result<User, AuthError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::EmailTaken(command.email.as_str().to_string()));
        }

        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(AuthError::UsernameTaken(command.username.as_str().to_string()));
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| AuthError::Unknown(format!("Password hashing failed: {}", e)))?;

        let avatar_url = gravatar_url(command.email.as_str());

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            role: Role::User,
            is_verified: false,
            refresh_token_hash: None,
            avatar_url: Some(avatar_url),
            created_at: Utc::now(),
        };

        let created = self.repository.create(user).await?;

        self.dispatch_verification(&created).await;

        Ok(created)
    }

    async fn login(&self, command: LoginCommand) -> Result<TokenPair, AuthError> {
        let user = self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Credentials first: a wrong password on an unverified account
        // must not reveal that the account exists but is unverified.
        if !self
            .password_hasher
            .verify(&command.password, &user.password_hash)
        {
            return Err(AuthError::InvalidCredentials);
        }

        if !user.is_verified {
            return Err(AuthError::NotVerified);
        }

        self.issue_session(&user).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        // Signature and expiry run before the stored-hash comparison, so
        // an expired token always reports as expired, never as revoked.
        let claims = self
            .token_service
            .decode_expecting(refresh_token, TokenScope::Refresh)?;

        let user = self.load_subject(&claims.sub).await?;

        match &user.refresh_token_hash {
            Some(stored) if *stored == hash_token(refresh_token) => {}
            _ => return Err(AuthError::TokenRevoked),
        }

        self.issue_session(&user).await
    }

    async fn logout(&self, user_id: &UserId) -> Result<(), AuthError> {
        self.repository.update_refresh_token(user_id, None).await?;

        Ok(())
    }

    async fn verify_email(&self, token: &str) -> Result<(), AuthError> {
        let claims = self
            .token_service
            .decode_expecting(token, TokenScope::EmailVerification)?;

        let user = self.load_subject(&claims.sub).await?;

        // Re-running a stale link succeeds without touching the store
        if user.is_verified {
            return Ok(());
        }

        self.repository.mark_verified(&user.id).await?;

        Ok(())
    }

    async fn request_verification(&self, email: &EmailAddress) -> Result<(), AuthError> {
        let Some(user) = self.repository.find_by_email(email.as_str()).await? else {
            // Unknown address succeeds silently: this endpoint must not
            // reveal which addresses have accounts
            return Ok(());
        };

        if user.is_verified {
            return Err(AuthError::AlreadyVerified);
        }

        self.dispatch_verification(&user).await;

        Ok(())
    }

    async fn forgot_password(&self, email: &EmailAddress) -> Result<(), AuthError> {
        let user = self
            .repository
            .find_by_email(email.as_str())
            .await?
            .ok_or_else(|| AuthError::UserNotFound(email.as_str().to_string()))?;

        if !user.is_verified {
            return Err(AuthError::NotVerified);
        }

        self.dispatch_password_reset(&user).await;

        Ok(())
    }

    async fn reset_password(&self, token: &str, new_password: &str) -> Result<(), AuthError> {
        let claims = self
            .token_service
            .decode_expecting(token, TokenScope::EmailVerification)?;

        let user = self.load_subject(&claims.sub).await?;

        if !user.is_verified {
            return Err(AuthError::NotVerified);
        }

        let password_hash = self
            .password_hasher
            .hash(new_password)
            .map_err(|e| AuthError::Unknown(format!("Password hashing failed: {}", e)))?;

        // update_password also clears the refresh-token hash, so every
        // session issued under the old password is dead after this call
        self.repository
            .update_password(&user.id, &password_hash)
            .await?;

        Ok(())
    }

    async fn authenticate(&self, access_token: &str) -> Result<User, AuthError> {
        let claims = self
            .token_service
            .decode_expecting(access_token, TokenScope::Access)?;

        self.load_subject(&claims.sub).await
    }
}

fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Digest stored in place of the refresh token itself, so a leaked
/// database snapshot yields no usable tokens.
fn hash_token(token: &str) -> String {
    sha256_hex(token)
}

/// Default avatar for a fresh account, derived from the email address.
fn gravatar_url(email: &str) -> String {
    format!("https://www.gravatar.com/avatar/{}", sha256_hex(email))
}
