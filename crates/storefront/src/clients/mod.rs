//! Typed clients, one per actor. Each wraps a
//! [`ResourceClient`](storefront_actor::ResourceClient) and implements
//! [`ActorClient`](storefront_actor::ActorClient) for the shared read/delete calls.

pub mod account_client;
pub mod blog_client;
pub mod cart_client;
pub mod profile_client;

pub use account_client::*;
pub use blog_client::*;
pub use cart_client::*;
pub use profile_client::*;
