use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for blog posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u32);

impl From<u32> for PostId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "post_{}", self.0)
    }
}

/// A published blog post, as stored in the archive file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: Option<String>,
}

/// Payload for publishing a post.
#[derive(Debug, Clone)]
pub struct BlogCreate {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
}
