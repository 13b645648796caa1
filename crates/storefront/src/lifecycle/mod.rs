//! # System Lifecycle
//!
//! Starting, wiring and stopping the storefront's actors.
//!
//! ## Wiring
//!
//! Actors are created first and receive their dependencies when they start, through
//! `run(context)`:
//!
//! | Actor | Context |
//! |---|---|
//! | Ledger | `()` |
//! | Blog | [`BlogArchive`](crate::blog_actor::BlogArchive) |
//! | Profile | [`AvatarStore`](crate::profile_actor::AvatarStore) |
//! | Account | `Arc<dyn OtpMailer>` |
//!
//! The ledger entity is then created from the catalog, and its id is baked into the
//! [`CartClient`](crate::clients::CartClient).
//!
//! ## Shutdown
//!
//! 1. Drop all clients, closing the sender side of every channel
//! 2. Each actor's `recv()` returns `None` once its queue is drained
//! 3. Await the actor tasks
//!
//! No actor holds another actor's client, so channel closure is enough.
//!
//! ## Tracing
//!
//! Call [`storefront_actor::tracing::setup_tracing`] once at startup; filter with
//! `RUST_LOG`.

pub mod storefront_system;

pub use storefront_system::*;
