//! Custom actions for the Ledger actor.
//!
//! The three cart operations and two read-only views. Each action is applied by
//! [`ActorEntity::handle_action`](storefront_actor::ActorEntity::handle_action) in a
//! single turn of the actor loop.

use crate::model::{CartItems, ProductId, StockRecord};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Reserve `quantity` more units of a product.
    Add { product_id: ProductId, quantity: u32 },
    /// Replace the reserved quantity of a product already in the cart.
    Update { product_id: ProductId, quantity: u32 },
    /// Drop a product from the cart and return its units to stock.
    Remove { product_id: ProductId },
    /// Snapshot of the cart.
    Items,
    /// Current stock record of one product.
    Stock(ProductId),
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    Add(CartItems),
    Update(CartItems),
    Remove(()),
    Items(CartItems),
    Stock(Option<StockRecord>),
}
