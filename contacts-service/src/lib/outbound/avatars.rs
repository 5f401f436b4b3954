use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::user::errors::AvatarStoreError;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::AvatarStore;

/// Avatar store backed by a directory on the local filesystem.
///
/// Files are named by user ID, so saving a new avatar replaces the
/// previous one in place.
pub struct FsAvatarStore {
    root: PathBuf,
}

impl FsAvatarStore {
    /// Create a new store rooted at the given directory.
    ///
    /// The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/png" => Some("png"),
        "image/jpeg" => Some("jpg"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

#[async_trait]
impl AvatarStore for FsAvatarStore {
    async fn save(
        &self,
        user_id: &UserId,
        bytes: &[u8],
        content_type: &str,
    ) -> Result<String, AvatarStoreError> {
        let Some(extension) = extension_for(content_type) else {
            return Err(AvatarStoreError::UnsupportedMediaType(
                content_type.to_string(),
            ));
        };

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AvatarStoreError::WriteFailed(e.to_string()))?;

        let file_name = format!("{}.{}", user_id, extension);

        tokio::fs::write(self.root.join(&file_name), bytes)
            .await
            .map_err(|e| AvatarStoreError::WriteFailed(e.to_string()))?;

        Ok(format!("/avatars/{}", file_name))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn temp_store() -> (FsAvatarStore, PathBuf) {
        let root = std::env::temp_dir().join(format!("avatars-test-{}", Uuid::new_v4()));
        (FsAvatarStore::new(root.clone()), root)
    }

    #[tokio::test]
    async fn test_save_writes_file_and_returns_reference() {
        let (store, root) = temp_store();
        let user_id = UserId::new();

        let url = store
            .save(&user_id, b"png-bytes", "image/png")
            .await
            .unwrap();

        assert_eq!(url, format!("/avatars/{}.png", user_id));

        let written = tokio::fs::read(root.join(format!("{}.png", user_id)))
            .await
            .unwrap();
        assert_eq!(written, b"png-bytes");

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_rejects_unsupported_media_type() {
        let (store, root) = temp_store();
        let user_id = UserId::new();

        let result = store.save(&user_id, b"<svg/>", "image/svg+xml").await;

        assert!(matches!(
            result.unwrap_err(),
            AvatarStoreError::UnsupportedMediaType(_)
        ));
        // The rejection happens before anything touches the disk
        assert!(!root.exists());
    }

    #[tokio::test]
    async fn test_save_replaces_previous_avatar() {
        let (store, root) = temp_store();
        let user_id = UserId::new();

        store.save(&user_id, b"first", "image/png").await.unwrap();
        store.save(&user_id, b"second", "image/png").await.unwrap();

        let written = tokio::fs::read(root.join(format!("{}.png", user_id)))
            .await
            .unwrap();
        assert_eq!(written, b"second");

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}
