use async_trait::async_trait;

use crate::domain::user::errors::AvatarStoreError;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for user profile operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Store a new avatar image and record its reference on the user.
    ///
    /// # Arguments
    /// * `user` - The user whose avatar is replaced
    /// * `bytes` - Raw image bytes
    /// * `content_type` - Media type of the image
    ///
    /// # Returns
    /// The user with the new avatar reference
    ///
    /// # Errors
    /// * `Avatar` - Image could not be stored or media type unsupported
    /// * `NotFound` - User no longer exists
    /// * `DatabaseError` - Database operation failed
    async fn update_avatar(
        &self,
        user: User,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<User, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Arguments
    /// * `user` - User entity to create
    ///
    /// # Returns
    /// Created user entity
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by normalized email address.
    ///
    /// # Arguments
    /// * `email` - Email address string, already normalized
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve user by username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Replace the stored refresh-token hash in a single update.
    ///
    /// Passing `None` clears the hash and thereby invalidates every
    /// previously issued refresh token for the user.
    ///
    /// # Arguments
    /// * `id` - User ID
    /// * `refresh_token_hash` - New hash, or None to clear
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_refresh_token(
        &self,
        id: &UserId,
        refresh_token_hash: Option<String>,
    ) -> Result<(), UserError>;

    /// Set the verification flag in a single update.
    ///
    /// # Arguments
    /// * `id` - User ID
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn mark_verified(&self, id: &UserId) -> Result<(), UserError>;

    /// Replace the password hash and clear the stored refresh-token hash
    /// in one statement, so no session issued under the old password
    /// survives the change.
    ///
    /// # Arguments
    /// * `id` - User ID
    /// * `password_hash` - New password hash in PHC string format
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_password(&self, id: &UserId, password_hash: &str) -> Result<(), UserError>;

    /// Replace the avatar reference.
    ///
    /// # Arguments
    /// * `id` - User ID
    /// * `avatar_url` - New avatar reference
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_avatar(&self, id: &UserId, avatar_url: &str) -> Result<(), UserError>;
}

/// Storage for avatar images.
#[async_trait]
pub trait AvatarStore: Send + Sync + 'static {
    /// Store an avatar image and return a reference to it.
    ///
    /// # Arguments
    /// * `user_id` - Owner of the avatar
    /// * `bytes` - Raw image bytes
    /// * `content_type` - Media type of the image
    ///
    /// # Returns
    /// Reference (URL or path) under which the avatar is reachable
    ///
    /// # Errors
    /// * `UnsupportedMediaType` - Media type is not an accepted image format
    /// * `WriteFailed` - Image could not be written
    async fn save(
        &self,
        user_id: &UserId,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<String, AvatarStoreError>;
}
