//! # ActorClient
//!
//! Shared read/delete operations for the typed clients that wrap a
//! [`ResourceClient`].

use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Implemented by each resource's client wrapper (`CartClient`, `BlogClient`, ...).
///
/// A wrapper supplies its inner [`ResourceClient`] and a mapping from runtime errors
/// to its own error type, and gets `get`, `list` and `delete` for free.
///
/// ```rust
/// use storefront_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32 }
/// #[derive(Debug)] struct NoteCreate;
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] enum NoteAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error: {0}")]
/// struct NoteError(String);
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, _: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct NoteClient {
///     inner: ResourceClient<Note>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Note> for NoteClient {
///     type Error = NoteError;
///
///     fn inner(&self) -> &ResourceClient<Note> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         NoteError(e.to_string())
///     }
/// }
///
/// async fn usage(client: NoteClient) {
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    type Error: Send + Sync;

    fn inner(&self) -> &ResourceClient<T>;

    fn map_error(e: FrameworkError) -> Self::Error;

    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
