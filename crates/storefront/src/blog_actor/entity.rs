//! ActorEntity implementation for [`BlogPost`].
//!
//! A post is validated when it is built and written to the [`BlogArchive`] in
//! `on_create`; if the write fails the actor discards the post.

use super::archive::BlogArchive;
use super::error::BlogError;
use crate::model::{BlogCreate, BlogPost, PostId};
use async_trait::async_trait;
use storefront_actor::ActorEntity;

#[async_trait]
impl ActorEntity for BlogPost {
    type Id = PostId;
    type Create = BlogCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = BlogArchive;
    type Error = BlogError;

    fn from_create_params(id: PostId, params: BlogCreate) -> Result<Self, Self::Error> {
        if params.title.trim().is_empty() {
            return Err(BlogError::Validation("title must not be blank".to_string()));
        }
        if params.content.trim().is_empty() {
            return Err(BlogError::Validation("content must not be blank".to_string()));
        }
        Ok(Self {
            id,
            title: params.title,
            content: params.content,
            author: params.author,
        })
    }

    async fn on_create(&mut self, archive: &BlogArchive) -> Result<(), Self::Error> {
        archive.append(self).await
    }

    async fn on_update(&mut self, _update: (), _ctx: &BlogArchive) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &BlogArchive) -> Result<(), Self::Error> {
        Ok(())
    }
}
