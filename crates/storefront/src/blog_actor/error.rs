//! Error types for the Blog actor.

use serde_json::{json, Value};
use thiserror::Error;

/// Errors that can occur while publishing or reading posts.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BlogError {
    /// A required field is blank.
    #[error("Blog validation error: {0}")]
    Validation(String),

    /// The archive file could not be read, parsed or written.
    #[error("Blog archive error at {path}: {reason}")]
    Archive { path: String, reason: String },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl BlogError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, BlogError::Validation(_))
    }

    pub fn detail(&self) -> Value {
        match self {
            BlogError::Validation(msg) => json!(msg),
            other => json!(other.to_string()),
        }
    }
}
