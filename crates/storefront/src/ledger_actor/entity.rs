//! ActorEntity implementation for the [`Ledger`], plus the three cart operations.
//!
//! Each operation validates everything it needs before touching either table, or
//! (for update) undoes its own credit before returning an error, so a failed call
//! leaves stock and cart untouched. For every product in the cart:
//!
//! ```text
//! stock[id].quantity + cart[id].quantity == opening stock[id].quantity
//! ```

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::model::{CartEntry, CartItems, Ledger, LedgerCreate, LedgerId, ProductId};
use async_trait::async_trait;
use storefront_actor::ActorEntity;

impl Ledger {
    /// Reserves `quantity` units: debits stock, then grows or creates the cart entry.
    ///
    /// Checks run in order: positive quantity, known product, enough stock, product
    /// available.
    pub fn add(&mut self, product_id: ProductId, quantity: u32) -> Result<&CartItems, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity {
                product_id,
                quantity,
            });
        }
        let record = self
            .stock
            .get_mut(&product_id)
            .ok_or(CartError::UnknownProduct { product_id })?;
        if record.quantity < quantity {
            return Err(CartError::InsufficientStock {
                product_id,
                available: record.quantity,
                requested: quantity,
            });
        }
        if !record.available {
            return Err(CartError::Unavailable { product_id });
        }

        record.quantity -= quantity;
        self.cart
            .entry(product_id)
            .and_modify(|entry| entry.quantity += quantity)
            .or_insert_with(|| CartEntry::new(product_id, quantity));
        Ok(&self.cart)
    }

    /// Replaces the reserved quantity of a product already in the cart.
    ///
    /// The previous reservation is credited back to stock, the new quantity is checked
    /// against the restored stock, and then either debited or the credit is undone.
    /// On failure `available` is the stock as it stood before this call.
    pub fn update(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<&CartItems, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity {
                product_id,
                quantity,
            });
        }
        let previous = self
            .cart
            .get(&product_id)
            .map(|entry| entry.quantity)
            .ok_or(CartError::NoCartEntry { product_id })?;
        let record = self
            .stock
            .get_mut(&product_id)
            .ok_or(CartError::UnknownProduct { product_id })?;

        // credit
        record.quantity += previous;
        if record.quantity < quantity {
            // rollback
            record.quantity -= previous;
            return Err(CartError::InsufficientStock {
                product_id,
                available: record.quantity,
                requested: quantity,
            });
        }
        // debit
        record.quantity -= quantity;
        self.cart.insert(product_id, CartEntry::new(product_id, quantity));
        Ok(&self.cart)
    }

    /// Removes the cart entry and returns its units to stock.
    pub fn remove(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let entry = self
            .cart
            .remove(&product_id)
            .ok_or(CartError::NotInCart { product_id })?;
        if let Some(record) = self.stock.get_mut(&product_id) {
            record.quantity += entry.quantity;
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Ledger {
    type Id = LedgerId;
    type Create = LedgerCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = ();
    type Error = CartError;

    fn from_create_params(id: LedgerId, params: LedgerCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.stock))
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies one cart action. Nothing here awaits, so the whole action completes
    /// before the actor reads its next message.
    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &Self::Context,
    ) -> Result<CartActionResult, Self::Error> {
        match action {
            CartAction::Add {
                product_id,
                quantity,
            } => self
                .add(product_id, quantity)
                .map(|items| CartActionResult::Add(items.clone())),
            CartAction::Update {
                product_id,
                quantity,
            } => self
                .update(product_id, quantity)
                .map(|items| CartActionResult::Update(items.clone())),
            CartAction::Remove { product_id } => {
                self.remove(product_id).map(CartActionResult::Remove)
            }
            CartAction::Items => Ok(CartActionResult::Items(self.cart.clone())),
            CartAction::Stock(product_id) => {
                Ok(CartActionResult::Stock(self.stock_of(product_id)))
            }
        }
    }
}
