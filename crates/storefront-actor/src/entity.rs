//! # ActorEntity
//!
//! The contract a storefront resource implements to be served by a
//! [`ResourceActor`](crate::ResourceActor). The associated types pin down the id,
//! the payloads, the custom actions, the injected context and the error type, so the
//! runtime can offer a uniform create/get/list/update/delete/action API for any of
//! them.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A resource managed by a [`ResourceActor`](crate::ResourceActor).
///
/// Hooks are async so they can touch the injected `Context` (write an archive file,
/// send a mail). Everything a hook does happens while the actor holds the store, so
/// other requests only ever see the entity before or after the hook.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier, minted by the actor from a `u32` counter.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload needed to create an instance.
    type Create: Send + Sync + Debug;

    /// Payload for an update.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations.
    type Action: Send + Sync + Debug;

    /// What a custom action returns.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies handed to [`ResourceActor::run`](crate::ResourceActor::run).
    /// Use `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per resource, shared by every hook and action.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its id and payload. Runs before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction; an error here discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before removal; an error here keeps the entity.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
