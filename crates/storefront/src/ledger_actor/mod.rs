//! # Ledger Actor
//!
//! The cart/stock ledger: one [`Ledger`] entity holding the stock table and the cart,
//! served by a [`ResourceActor`].
//!
//! ## Structure
//!
//! - [`entity`] - `add`, `update`, `remove` on [`Ledger`] and its
//!   [`ActorEntity`](storefront_actor::ActorEntity) implementation
//! - [`error`] - [`CartError`] with structured details
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`new()`] - creates the actor and its client
//!
//! ## Why a single entity
//!
//! Stock and cart are both fields of the same `Ledger`, so every cart action touches
//! them inside one turn of the actor loop. A concurrent request sees the ledger
//! either before or after an operation, never between a credit and a debit.
//!
//! ## Usage
//!
//! ```rust
//! use storefront::clients::CartClient;
//! use storefront::ledger_actor;
//! use storefront::model::{Catalog, LedgerCreate, ProductId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::bundled()?;
//!     let (actor, generic_client) = ledger_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let ledger_id = generic_client.create(LedgerCreate::from_catalog(&catalog)).await?;
//!     let cart = CartClient::new(generic_client, ledger_id);
//!
//!     let response = cart.add_item(ProductId(1), 4).await?;
//!     assert_eq!(response.cart_items[&ProductId(1)].quantity, 4);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Ledger;
use storefront_actor::{ResourceActor, ResourceClient};

/// Creates a new Ledger actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Ledger>, ResourceClient<Ledger>) {
    ResourceActor::new(buffer_size)
}
