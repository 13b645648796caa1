//! # Profile Actor
//!
//! Validates profile uploads and stores the avatar image on disk.
//!
//! - [`entity`] - [`ActorEntity`](storefront_actor::ActorEntity) implementation for
//!   [`Profile`]
//! - [`avatar_store`] - [`AvatarStore`], injected as the actor's context
//! - [`error`] - [`ProfileError`] with the upload detail object

pub mod avatar_store;
pub mod entity;
pub mod error;

pub use avatar_store::*;
pub use error::*;

use crate::model::Profile;
use storefront_actor::{ResourceActor, ResourceClient};

/// Largest accepted avatar, in bytes.
pub const MAX_AVATAR_BYTES: usize = 300_000;

/// Accepted avatar extensions, compared case-insensitively.
pub const AVATAR_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Creates a new Profile actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Profile>, ResourceClient<Profile>) {
    ResourceActor::new(buffer_size)
}
