//! Error types for the Profile actor.

use super::{AVATAR_EXTENSIONS, MAX_AVATAR_BYTES};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    #[error("name must be between 2 and 30 characters, got {length}")]
    InvalidName { length: usize },

    #[error("value is not a valid email address: {email}")]
    InvalidEmail { email: String },

    /// Avatar too large or of an unsupported type.
    #[error("Check if the uploaded file is not greater than the minimum size or supports the required file extention.")]
    InvalidAvatar {
        file_name: String,
        size: usize,
        extension: String,
    },

    /// The avatar bytes could not be written.
    #[error("failed to store avatar: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

fn kilobytes(bytes: usize) -> String {
    format!("{:.0}kb", bytes as f64 / 1000.0)
}

impl ProfileError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ProfileError::InvalidName { .. }
                | ProfileError::InvalidEmail { .. }
                | ProfileError::InvalidAvatar { .. }
        )
    }

    pub fn detail(&self) -> Value {
        match self {
            ProfileError::InvalidAvatar {
                file_name,
                size,
                extension,
            } => json!({
                "msg": self.to_string(),
                "expected_size": kilobytes(MAX_AVATAR_BYTES),
                "uploaded_file_size": kilobytes(*size),
                "required_extention": AVATAR_EXTENSIONS,
                "uploaded_extention": extension,
                "file_name": file_name,
            }),
            other => json!({ "msg": other.to_string() }),
        }
    }
}
