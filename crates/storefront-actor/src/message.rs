//! # Requests
//!
//! The message type carried from [`ResourceClient`](crate::ResourceClient) to
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot reply channel for a request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request addressed to a resource actor.
///
/// The variants cover the resource lifecycle (create, read, list, update, delete)
/// plus `Action` for domain operations such as adding an item to the cart. Payload
/// types come from the entity's associated types, so a blog payload cannot be sent
/// to the ledger actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
