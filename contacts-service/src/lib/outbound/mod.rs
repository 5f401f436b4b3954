pub mod avatars;
pub mod email;
pub mod repositories;
