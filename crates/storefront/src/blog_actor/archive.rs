//! The JSON file every published post is appended to.

use super::error::BlogError;
use crate::model::{BlogPost, PostId};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// A pretty-printed JSON array of posts on disk.
///
/// Entries are kept as raw JSON values, so records written by other tools survive
/// an append untouched.
#[derive(Debug, Clone)]
pub struct BlogArchive {
    path: PathBuf,
}

impl BlogArchive {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every entry in the archive. A missing file reads as empty.
    pub async fn entries(&self) -> Result<Vec<Value>, BlogError> {
        match fs::read_to_string(&self.path).await {
            Ok(json) => serde_json::from_str(&json).map_err(|e| self.error(e)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.error(e)),
        }
    }

    /// The id after the highest numeric id in the archive, or 1 for an empty one.
    ///
    /// Entries whose `id` is not an unsigned integer are skipped.
    pub async fn next_id(&self) -> Result<PostId, BlogError> {
        let highest = self
            .entries()
            .await?
            .iter()
            .filter_map(|entry| entry.get("id")?.as_u64())
            .max()
            .unwrap_or(0);
        u32::try_from(highest.saturating_add(1))
            .map(PostId)
            .map_err(|_| self.error(format!("post id {highest} exhausts the id range")))
    }

    /// Reads the archive, appends `post` and writes the whole array back.
    ///
    /// The array goes to a sibling `.tmp` file first and is renamed over the
    /// archive, so an interrupted write leaves the previous archive intact.
    pub async fn append(&self, post: &BlogPost) -> Result<(), BlogError> {
        let mut entries = self.entries().await?;
        entries.push(serde_json::to_value(post).map_err(|e| self.error(e))?);

        let json = serde_json::to_string_pretty(&entries).map_err(|e| self.error(e))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| self.error(e))?;
        }
        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json).await.map_err(|e| self.error(e))?;
        fs::rename(&tmp_path, &self.path).await.map_err(|e| self.error(e))?;
        debug!(path = %self.path.display(), entries = entries.len(), "Archive written");
        Ok(())
    }

    fn error(&self, reason: impl std::fmt::Display) -> BlogError {
        BlogError::Archive {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}
