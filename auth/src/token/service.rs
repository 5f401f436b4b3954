use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenScope;
use super::errors::TokenError;

/// Per-class token lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetimes {
    pub access: Duration,
    pub refresh: Duration,
    pub verification: Duration,
}

impl TokenLifetimes {
    pub fn new(access_minutes: i64, refresh_days: i64, verification_hours: i64) -> Self {
        Self {
            access: Duration::minutes(access_minutes),
            refresh: Duration::days(refresh_days),
            verification: Duration::hours(verification_hours),
        }
    }
}

impl Default for TokenLifetimes {
    fn default() -> Self {
        Self::new(15, 7, 1)
    }
}

/// A freshly signed token together with its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues and verifies signed tokens.
///
/// Every token carries a class tag in its payload, so verification can
/// insist on the class an endpoint expects. Signature and expiry checks
/// happen on decode; class checks happen in [`TokenService::decode_expecting`].
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetimes: TokenLifetimes,
}

impl TokenService {
    /// Create a new token service from a shared secret.
    ///
    /// # Arguments
    /// * `secret` - HMAC secret used to sign and verify tokens
    /// * `lifetimes` - Lifetime applied to each token class at issuance
    pub fn new(secret: &[u8], lifetimes: TokenLifetimes) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            lifetimes,
        }
    }

    /// Issue an access token for a subject.
    ///
    /// # Arguments
    /// * `subject` - User identifier embedded as `sub`
    /// * `role` - Role at issuance time, recorded in the claims
    ///
    /// # Errors
    /// Returns `TokenError::EncodingFailed` if signing fails
    pub fn issue_access_token(&self, subject: &str, role: &str) -> Result<IssuedToken, TokenError> {
        let claims =
            Claims::new(subject, TokenScope::Access, self.lifetimes.access).with_role(role);
        self.issue(claims)
    }

    /// Issue a refresh token for a subject.
    ///
    /// # Arguments
    /// * `subject` - User identifier embedded as `sub`
    /// * `role` - Role at issuance time, recorded in the claims
    ///
    /// # Errors
    /// Returns `TokenError::EncodingFailed` if signing fails
    pub fn issue_refresh_token(
        &self,
        subject: &str,
        role: &str,
    ) -> Result<IssuedToken, TokenError> {
        let claims =
            Claims::new(subject, TokenScope::Refresh, self.lifetimes.refresh).with_role(role);
        self.issue(claims)
    }

    /// Issue an email-verification token for a subject.
    ///
    /// Verification tokens carry no role claim.
    ///
    /// # Errors
    /// Returns `TokenError::EncodingFailed` if signing fails
    pub fn issue_verification_token(&self, subject: &str) -> Result<IssuedToken, TokenError> {
        let claims = Claims::new(
            subject,
            TokenScope::EmailVerification,
            self.lifetimes.verification,
        );
        self.issue(claims)
    }

    fn issue(&self, claims: Claims) -> Result<IssuedToken, TokenError> {
        let header = Header::new(self.algorithm);
        let token = encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_at: claims.expires_at(),
        })
    }

    /// Decode a token and return its claims.
    ///
    /// Verifies the signature and the expiry. Expiry is reported as its
    /// own error so callers can distinguish a stale token from a forged
    /// or mangled one.
    ///
    /// # Errors
    /// Returns `TokenError::ExpiredToken` if the token is past its expiry,
    /// `TokenError::InvalidToken` for any other verification failure
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::ExpiredToken,
                    _ => TokenError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(data.claims)
    }

    /// Decode a token and require a specific class.
    ///
    /// Signature and expiry checks run first, so an expired token of the
    /// wrong class still reports as expired.
    ///
    /// # Errors
    /// Returns `TokenError::WrongTokenClass` if the decoded class differs
    /// from `expected`, otherwise the errors of [`TokenService::decode`]
    pub fn decode_expecting(
        &self,
        token: &str,
        expected: TokenScope,
    ) -> Result<Claims, TokenError> {
        let claims = self.decode(token)?;

        if claims.scope != expected {
            return Err(TokenError::WrongTokenClass {
                expected,
                actual: claims.scope,
            });
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(b"test_secret", TokenLifetimes::default())
    }

    #[test]
    fn test_issue_and_decode_access_token() {
        let service = service();

        let issued = service.issue_access_token("user123", "user").unwrap();
        let claims = service.decode(&issued.token).unwrap();

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.scope, TokenScope::Access);
        assert_eq!(claims.role.as_deref(), Some("user"));
        assert_eq!(claims.expires_at(), issued.expires_at);
    }

    #[test]
    fn test_verification_token_has_no_role() {
        let service = service();

        let issued = service.issue_verification_token("user123").unwrap();
        let claims = service.decode(&issued.token).unwrap();

        assert_eq!(claims.scope, TokenScope::EmailVerification);
        assert!(claims.role.is_none());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let service = service();

        let result = service.decode("not.a.token");

        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_rejects_wrong_secret() {
        let issuer = TokenService::new(b"secret_a", TokenLifetimes::default());
        let verifier = TokenService::new(b"secret_b", TokenLifetimes::default());

        let issued = issuer.issue_access_token("user123", "user").unwrap();
        let result = verifier.decode(&issued.token);

        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_decode_rejects_expired_token() {
        let lifetimes = TokenLifetimes {
            access: Duration::hours(-2),
            ..TokenLifetimes::default()
        };
        let service = TokenService::new(b"test_secret", lifetimes);

        let issued = service.issue_access_token("user123", "user").unwrap();
        let result = service.decode(&issued.token);

        assert_eq!(result, Err(TokenError::ExpiredToken));
    }

    #[test]
    fn test_decode_expecting_accepts_matching_class() {
        let service = service();

        let issued = service.issue_refresh_token("user123", "user").unwrap();
        let claims = service
            .decode_expecting(&issued.token, TokenScope::Refresh)
            .unwrap();

        assert_eq!(claims.scope, TokenScope::Refresh);
    }

    #[test]
    fn test_refresh_token_is_not_an_access_token() {
        let service = service();

        let issued = service.issue_refresh_token("user123", "user").unwrap();
        let result = service.decode_expecting(&issued.token, TokenScope::Access);

        assert_eq!(
            result,
            Err(TokenError::WrongTokenClass {
                expected: TokenScope::Access,
                actual: TokenScope::Refresh,
            })
        );
    }

    #[test]
    fn test_access_token_is_not_a_verification_token() {
        let service = service();

        let issued = service.issue_access_token("user123", "user").unwrap();
        let result = service.decode_expecting(&issued.token, TokenScope::EmailVerification);

        assert_eq!(
            result,
            Err(TokenError::WrongTokenClass {
                expected: TokenScope::EmailVerification,
                actual: TokenScope::Access,
            })
        );
    }

    #[test]
    fn test_expired_token_of_wrong_class_reports_expired() {
        let lifetimes = TokenLifetimes {
            refresh: Duration::days(-1),
            ..TokenLifetimes::default()
        };
        let service = TokenService::new(b"test_secret", lifetimes);

        let issued = service.issue_refresh_token("user123", "user").unwrap();
        let result = service.decode_expecting(&issued.token, TokenScope::Access);

        assert_eq!(result, Err(TokenError::ExpiredToken));
    }
}
