pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::auth;
pub use domain::contact;
pub use domain::user;
pub use outbound::repositories;
