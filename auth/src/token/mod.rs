pub mod claims;
pub mod errors;
pub mod service;

pub use claims::Claims;
pub use claims::TokenScope;
pub use errors::TokenError;
pub use service::IssuedToken;
pub use service::TokenLifetimes;
pub use service::TokenService;
