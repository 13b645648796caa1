use super::error::ProfileError;
use crate::model::AvatarUpload;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory that accepted avatars are written to, under random names.
#[derive(Debug, Clone)]
pub struct AvatarStore {
    dir: PathBuf,
}

impl AvatarStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes the upload to `<dir>/<32 hex chars>.<ext>`, creating `dir` if needed.
    pub async fn save(&self, upload: &AvatarUpload) -> Result<PathBuf, ProfileError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ProfileError::Storage(e.to_string()))?;

        let name = hex::encode(rand::random::<[u8; 16]>());
        let path = self.dir.join(format!("{name}.{}", upload.extension()));
        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|e| ProfileError::Storage(e.to_string()))?;

        debug!(path = %path.display(), size = upload.bytes.len(), "Avatar saved");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_creates_directory_and_random_names() {
        let root = tempfile::tempdir().unwrap();
        let store = AvatarStore::new(root.path().join("image"));
        let upload = AvatarUpload {
            file_name: "me.JPG".to_string(),
            bytes: vec![1, 2, 3],
        };

        let first = store.save(&upload).await.unwrap();
        let second = store.save(&upload).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(first.parent(), Some(store.dir()));
        assert_eq!(first.extension().unwrap(), "JPG");
        assert_eq!(first.file_stem().unwrap().len(), 32);
        assert_eq!(tokio::fs::read(&first).await.unwrap(), vec![1, 2, 3]);
    }
}
