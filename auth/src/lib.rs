//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2id)
//! - Class-tagged token generation and validation
//!
//! Each service defines its own authentication traits and adapts these implementations.
//! This avoids coupling services through shared domain logic while reducing code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{TokenLifetimes, TokenScope, TokenService};
//!
//! let service = TokenService::new(b"secret_key_at_least_32_bytes_long!", TokenLifetimes::default());
//!
//! // Issue an access token for a user
//! let issued = service.issue_access_token("user123", "user").unwrap();
//!
//! // Verify it, insisting on the access class
//! let claims = service.decode_expecting(&issued.token, TokenScope::Access).unwrap();
//! assert_eq!(claims.sub, "user123");
//!
//! // The same token is not accepted where a refresh token is required
//! assert!(service.decode_expecting(&issued.token, TokenScope::Refresh).is_err());
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::IssuedToken;
pub use token::TokenError;
pub use token::TokenLifetimes;
pub use token::TokenScope;
pub use token::TokenService;
