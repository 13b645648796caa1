//! The cart/stock ledger: remaining stock per product and the quantity of each
//! product currently reserved in the cart.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](storefront_actor::ActorEntity) trait,
//! so a single [`ResourceActor`](storefront_actor::ResourceActor) task owns both
//! tables and applies every cart operation as one step.
//!
//! See [`impl ActorEntity for Ledger`](#impl-ActorEntity-for-Ledger) for:
//! - Creation parameters ([`LedgerCreate`])
//! - Custom actions ([`CartAction`](crate::ledger_actor::CartAction))

use crate::model::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Catalog product number. Serializes as the bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe identifier for Ledgers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LedgerId(pub u32);

impl From<u32> for LedgerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for LedgerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ledger_{}", self.0)
    }
}

/// Sellable units left for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRecord {
    pub quantity: u32,
    pub available: bool,
}

/// Units of one product reserved in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Display label, `product{id}`.
    pub item: String,
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            item: format!("product{}", product_id.0),
            quantity,
        }
    }
}

/// The whole cart, keyed by product. Serializes as a JSON object keyed by id.
pub type CartItems = BTreeMap<ProductId, CartEntry>;

#[derive(Debug, Clone)]
pub struct Ledger {
    pub id: LedgerId,
    pub(crate) stock: BTreeMap<ProductId, StockRecord>,
    pub(crate) cart: CartItems,
}

impl Ledger {
    /// Creates a ledger with an empty cart.
    pub fn new(id: LedgerId, stock: BTreeMap<ProductId, StockRecord>) -> Self {
        Self {
            id,
            stock,
            cart: CartItems::new(),
        }
    }

    pub fn cart_items(&self) -> &CartItems {
        &self.cart
    }

    pub fn stock_of(&self, product_id: ProductId) -> Option<StockRecord> {
        self.stock.get(&product_id).copied()
    }
}

/// Payload for creating a ledger: the opening stock table.
#[derive(Debug, Clone, Default)]
pub struct LedgerCreate {
    pub stock: BTreeMap<ProductId, StockRecord>,
}

impl LedgerCreate {
    /// Seeds the stock table from the catalog's quantities and availability flags.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let stock = catalog
            .items()
            .iter()
            .map(|item| {
                (
                    item.product_id,
                    StockRecord {
                        quantity: item.quantity,
                        available: item.available,
                    },
                )
            })
            .collect();
        Self { stock }
    }
}

/// Success body for add and update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartResponse {
    pub message: String,
    pub cart_items: CartItems,
}

impl CartResponse {
    pub fn added(cart_items: CartItems) -> Self {
        Self {
            message: "Item added successfully.".to_string(),
            cart_items,
        }
    }

    pub fn updated(cart_items: CartItems) -> Self {
        Self {
            message: "Item was updated successfully.".to_string(),
            cart_items,
        }
    }
}
