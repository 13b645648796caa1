//! # Blog Actor
//!
//! Stores published posts and appends each one to a JSON archive file.
//!
//! - [`entity`] - [`ActorEntity`](storefront_actor::ActorEntity) implementation for
//!   [`BlogPost`]
//! - [`archive`] - [`BlogArchive`], injected as the actor's context
//! - [`error`] - [`BlogError`]

pub mod archive;
pub mod entity;
pub mod error;

pub use archive::*;
pub use error::*;

use crate::model::BlogPost;
use storefront_actor::{ResourceActor, ResourceClient};
use tracing::info;

/// Creates a new Blog actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<BlogPost>, ResourceClient<BlogPost>) {
    ResourceActor::new(buffer_size)
}

/// Creates a Blog actor that continues numbering after the posts already in
/// `archive`.
pub async fn resume(
    buffer_size: usize,
    archive: &BlogArchive,
) -> Result<(ResourceActor<BlogPost>, ResourceClient<BlogPost>), BlogError> {
    let next_id = archive.next_id().await?;
    info!(path = %archive.path().display(), %next_id, "Resuming blog archive");
    let (actor, client) = new(buffer_size);
    Ok((actor.starting_at(next_id.0), client))
}
