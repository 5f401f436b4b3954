use async_trait::async_trait;

use crate::domain::auth::errors::EmailDispatchError;
use crate::domain::auth::ports::EmailDispatcher;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Username;

/// Email dispatcher that writes outgoing messages to the log instead
/// of an SMTP relay.
///
/// Stands in wherever no mail infrastructure is wired up. The logged
/// verification link is the real one and works against the running
/// server.
pub struct TracingEmailDispatcher {
    from_address: String,
    base_url: String,
}

impl TracingEmailDispatcher {
    /// Create a new dispatcher.
    ///
    /// # Arguments
    /// * `from_address` - Sender address stamped on every message
    /// * `base_url` - Public base URL used to build verification links
    pub fn new(from_address: String, base_url: String) -> Self {
        Self {
            from_address,
            base_url,
        }
    }
}

#[async_trait]
impl EmailDispatcher for TracingEmailDispatcher {
    async fn send_verification(
        &self,
        email: &EmailAddress,
        username: &Username,
        token: &str,
    ) -> Result<(), EmailDispatchError> {
        tracing::info!(
            "Verification email from {} to {} ({}): {}/api/auth/verify/{}",
            self.from_address,
            email,
            username,
            self.base_url,
            token
        );

        Ok(())
    }

    async fn send_password_reset(
        &self,
        email: &EmailAddress,
        username: &Username,
        token: &str,
    ) -> Result<(), EmailDispatchError> {
        tracing::info!(
            "Password reset email from {} to {} ({}): reset token {}",
            self.from_address,
            email,
            username,
            token
        );

        Ok(())
    }
}
