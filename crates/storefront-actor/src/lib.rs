//! # Storefront Actor Runtime
//!
//! Resource-oriented actors on Tokio. Every storefront resource (the cart/stock
//! ledger, blog posts, profiles, accounts) is an [`ActorEntity`] held by a
//! [`ResourceActor`], a single task that owns an `id -> entity` store and applies
//! requests one at a time.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the domain rules: how a resource is built from its
//!    create payload, how it updates, and which custom actions it answers.
//! 2. **Runtime** ([`ResourceActor`]) - the message loop. Because one task owns the
//!    store, a multi-step action (debit, check, roll back) can never interleave with
//!    another request.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - cloneable async handles.
//!
//! ## Example
//!
//! ```rust
//! use storefront_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Shelf {
//!     id: u32,
//!     units: u32,
//! }
//!
//! #[derive(Debug)] struct ShelfCreate { units: u32 }
//! #[derive(Debug)] struct ShelfUpdate { units: Option<u32> }
//! #[derive(Debug)] enum ShelfAction { Take(u32) }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("only {0} units left")]
//! struct ShelfError(u32);
//!
//! #[async_trait]
//! impl ActorEntity for Shelf {
//!     type Id = u32;
//!     type Create = ShelfCreate;
//!     type Update = ShelfUpdate;
//!     type Action = ShelfAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = ShelfError;
//!
//!     fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, units: params.units })
//!     }
//!
//!     async fn on_update(&mut self, update: ShelfUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(units) = update.units { self.units = units; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: ShelfAction, _ctx: &()) -> Result<u32, Self::Error> {
//!         match action {
//!             ShelfAction::Take(n) if n <= self.units => {
//!                 self.units -= n;
//!                 Ok(self.units)
//!             }
//!             ShelfAction::Take(_) => Err(ShelfError(self.units)),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Shelf>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(ShelfCreate { units: 5 }).await.unwrap();
//!     assert_eq!(client.perform_action(id, ShelfAction::Take(2)).await.unwrap(), 3);
//!     assert!(client.perform_action(id, ShelfAction::Take(9)).await.is_err());
//! }
//! ```
//!
//! ## Context injection
//!
//! Dependencies (a mailer, an archive file, another client) are handed to
//! [`ResourceActor::run`] rather than to the constructor, so actors can be created
//! first and wired afterwards.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from a queue of expectations, so client
//! wrappers can be tested without a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
