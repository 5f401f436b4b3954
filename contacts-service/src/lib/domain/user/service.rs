use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::ports::AvatarStore;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user profile operations.
///
/// Generic over repository and avatar store for testability.
pub struct UserService<UR, AS>
where
    UR: UserRepository,
    AS: AvatarStore,
{
    repository: Arc<UR>,
    avatar_store: Arc<AS>,
}

impl<UR, AS> UserService<UR, AS>
where
    UR: UserRepository,
    AS: AvatarStore,
{
    pub fn new(repository: Arc<UR>, avatar_store: Arc<AS>) -> Self {
        Self {
            repository,
            avatar_store,
        }
    }
}

#[async_trait]
impl<UR, AS> UserServicePort for UserService<UR, AS>
where
    UR: UserRepository,
    AS: AvatarStore,
{
    async fn update_avatar(
        &self,
        mut user: User,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<User, UserError> {
        let avatar_url = self.avatar_store.save(&user.id, bytes, content_type).await?;

        self.repository.update_avatar(&user.id, &avatar_url).await?;

        user.avatar_url = Some(avatar_url);
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::errors::AvatarStoreError;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::Role;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::Username;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: User) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn update_refresh_token(
                &self,
                id: &UserId,
                refresh_token_hash: Option<String>,
            ) -> Result<(), UserError>;
            async fn mark_verified(&self, id: &UserId) -> Result<(), UserError>;
            async fn update_password(&self, id: &UserId, password_hash: &str) -> Result<(), UserError>;
            async fn update_avatar(&self, id: &UserId, avatar_url: &str) -> Result<(), UserError>;
        }
    }

    mock! {
        pub TestAvatarStore {}

        #[async_trait]
        impl AvatarStore for TestAvatarStore {
            async fn save(
                &self,
                user_id: &UserId,
                bytes: &[u8],
                content_type: &str,
            ) -> Result<String, AvatarStoreError>;
        }
    }

    fn test_user() -> User {
        User {
            id: UserId::new(),
            username: Username::new("testuser".to_string()).unwrap(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            role: Role::Admin,
            is_verified: true,
            refresh_token_hash: None,
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_update_avatar_stores_image_and_reference() {
        let mut repository = MockTestUserRepository::new();
        let mut avatar_store = MockTestAvatarStore::new();

        let user = test_user();
        let user_id = user.id;

        avatar_store
            .expect_save()
            .withf(move |id, bytes, content_type| {
                *id == user_id && bytes == [1u8, 2, 3] && content_type == "image/png"
            })
            .times(1)
            .returning(|id, _, _| Ok(format!("/avatars/{}.png", id)));

        repository
            .expect_update_avatar()
            .withf(move |id, url| *id == user_id && url.ends_with(".png"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UserService::new(Arc::new(repository), Arc::new(avatar_store));

        let updated = service
            .update_avatar(user, &[1, 2, 3], "image/png")
            .await
            .unwrap();

        assert_eq!(updated.avatar_url, Some(format!("/avatars/{}.png", user_id)));
    }

    #[tokio::test]
    async fn test_update_avatar_rejects_unsupported_media_type() {
        let mut repository = MockTestUserRepository::new();
        let mut avatar_store = MockTestAvatarStore::new();

        avatar_store.expect_save().times(1).returning(|_, _, ct| {
            Err(AvatarStoreError::UnsupportedMediaType(ct.to_string()))
        });
        repository.expect_update_avatar().times(0);

        let service = UserService::new(Arc::new(repository), Arc::new(avatar_store));

        let result = service
            .update_avatar(test_user(), &[1, 2, 3], "text/plain")
            .await;

        assert!(matches!(
            result.unwrap_err(),
            UserError::Avatar(AvatarStoreError::UnsupportedMediaType(_))
        ));
    }
}
