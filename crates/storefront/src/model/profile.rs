use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};
use std::path::PathBuf;

/// Type-safe identifier for Profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProfileId(pub u32);

impl From<u32> for ProfileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProfileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "profile_{}", self.0)
    }
}

/// A user profile with a stored avatar image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    #[serde(skip)]
    pub id: ProfileId,
    pub name: String,
    pub email: String,
    pub avatar_path: PathBuf,
    /// Upload accepted by validation but not yet written to the avatar store.
    #[serde(skip)]
    pub(crate) pending_avatar: Option<AvatarUpload>,
}

/// An uploaded avatar file.
#[derive(Clone, PartialEq)]
pub struct AvatarUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    /// Text after the last `.` of the file name, as uploaded. A name without a
    /// dot is its own extension.
    pub fn extension(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map_or(self.file_name.as_str(), |(_, ext)| ext)
    }
}

// Upload bodies are large; log their size only.
impl Debug for AvatarUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarUpload")
            .field("file_name", &self.file_name)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Payload for the profile form.
#[derive(Debug, Clone)]
pub struct ProfileCreate {
    pub name: String,
    pub email: String,
    pub avatar: AvatarUpload,
}
