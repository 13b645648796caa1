//! # ResourceActor
//!
//! The server half of a resource: one Tokio task that owns the store and applies
//! requests strictly one after another.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns every entity of type `T` and the receiving end of its request channel.
///
/// Requests are processed sequentially inside [`run`](Self::run), so the store needs
/// no lock and an action that mutates several fields of an entity is observed by
/// other callers either entirely or not at all.
///
/// Ids are minted from a `u32` counter starting at 1, or wherever
/// [`starting_at`](Self::starting_at) puts it. The store is ordered by id,
/// which makes [`ResourceClient::list`] deterministic.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and a client bound to it.
    ///
    /// `buffer_size` is the channel capacity; senders wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Mints ids from `next_id` instead of 1, for resources whose earlier ids are
    /// persisted elsewhere.
    pub fn starting_at(mut self, next_id: u32) -> Self {
        self.next_id = next_id;
        self
    }

    /// Runs the message loop until every client has been dropped.
    ///
    /// `context` is passed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Ledger" rather than "storefront::model::ledger::Ledger"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let result = match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => match item.on_create(&context).await {
                            Ok(()) => {
                                self.store.insert(id.clone(), item);
                                info!(entity_type, %id, size = self.store.len(), "Created");
                                Ok(id)
                            }
                            Err(e) => {
                                warn!(entity_type, error = %e, "on_create failed");
                                Err(FrameworkError::EntityError(Box::new(e)))
                            }
                        },
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            Err(FrameworkError::EntityError(Box::new(e)))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = match self.store.get_mut(&id) {
                        Some(item) => match item.on_update(update, &context).await {
                            Ok(()) => {
                                info!(entity_type, %id, "Updated");
                                Ok(item.clone())
                            }
                            Err(e) => {
                                warn!(entity_type, %id, error = %e, "Update failed");
                                Err(FrameworkError::EntityError(Box::new(e)))
                            }
                        },
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = match self.store.get(&id) {
                        Some(item) => match item.on_delete(&context).await {
                            Ok(()) => {
                                self.store.remove(&id);
                                info!(entity_type, %id, size = self.store.len(), "Deleted");
                                Ok(())
                            }
                            Err(e) => {
                                warn!(entity_type, %id, error = %e, "on_delete failed");
                                Err(FrameworkError::EntityError(Box::new(e)))
                            }
                        },
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = match self.store.get_mut(&id) {
                        Some(item) => {
                            let result = item
                                .handle_action(action, &context)
                                .await
                                .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                            match &result {
                                Ok(_) => info!(entity_type, %id, "Action ok"),
                                Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                            }
                            result
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
