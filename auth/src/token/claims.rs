use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Token class tag embedded in every issued token.
///
/// The tag travels inside the signed payload, so a structurally valid
/// token of one class can never be presented where another class is
/// required (an access token is not a refresh token, and neither opens
/// the email-verification flow).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenScope {
    Access,
    Refresh,
    EmailVerification,
}

impl fmt::Display for TokenScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenScope::Access => "access",
            TokenScope::Refresh => "refresh",
            TokenScope::EmailVerification => "email_verification",
        };
        name.fmt(f)
    }
}

/// Signed claim set shared by all token classes.
///
/// `sub` is the user identifier, `scope` the token class, and `role` the
/// caller's role at issuance time (access and refresh tokens only; the
/// claim is informational and may go stale until the token expires).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Token class tag
    pub scope: TokenScope,

    /// Role at issuance time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Claims {
    /// Create claims for a subject with the given class and lifetime.
    ///
    /// # Arguments
    /// * `subject` - User identifier to embed as `sub`
    /// * `scope` - Token class tag
    /// * `lifetime` - Duration until expiry, measured from now
    ///
    /// # Returns
    /// Claims with sub, iat, exp, and scope set
    pub fn new(subject: impl ToString, scope: TokenScope, lifetime: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + lifetime;

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            scope,
            role: None,
        }
    }

    /// Set the role claim.
    pub fn with_role(mut self, role: impl ToString) -> Self {
        self.role = Some(role.to_string());
        self
    }

    /// Expiry as a UTC timestamp.
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0).single().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new("user123", TokenScope::Access, Duration::minutes(15));

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.scope, TokenScope::Access);
        assert_eq!(claims.exp - claims.iat, 15 * 60);
        assert!(claims.role.is_none());
    }

    #[test]
    fn test_with_role() {
        let claims =
            Claims::new("user123", TokenScope::Refresh, Duration::days(7)).with_role("admin");

        assert_eq!(claims.role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_scope_serializes_as_snake_case() {
        let claims = Claims::new("u", TokenScope::EmailVerification, Duration::hours(1));
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["scope"], "email_verification");
        // role is omitted entirely when unset
        assert!(json.get("role").is_none());
    }

    #[test]
    fn test_expires_at_roundtrip() {
        let claims = Claims::new("u", TokenScope::Access, Duration::minutes(1));
        assert_eq!(claims.expires_at().timestamp(), claims.exp);
    }
}
