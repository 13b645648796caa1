//! Error types for the cart/stock ledger.

use crate::model::ProductId;
use serde_json::{json, Value};
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Every variant except [`CartError::ActorCommunicationError`] is a caller-input
/// error: it is reported with enough context to correct the request, and the ledger
/// is left exactly as it was.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The product id is not in the stock table.
    #[error("Invalid product id")]
    UnknownProduct { product_id: ProductId },

    /// The product has no cart entry to delete.
    #[error("The product with id {product_id} is not in your cart.")]
    NotInCart { product_id: ProductId },

    /// The product has no cart entry to update.
    #[error("Product id not in cart")]
    NoCartEntry { product_id: ProductId },

    /// The requested quantity exceeds the stock that can be reserved.
    #[error("Quantity selected is more than the available quantity")]
    InsufficientStock {
        product_id: ProductId,
        available: u32,
        requested: u32,
    },

    /// The product is flagged as not for sale.
    #[error("Product is not available")]
    Unavailable { product_id: ProductId },

    /// Quantities must be positive.
    #[error("Quantity must be greater than zero")]
    InvalidQuantity { product_id: ProductId, quantity: u32 },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl CartError {
    /// `true` for every flavour of missing id.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CartError::UnknownProduct { .. }
                | CartError::NotInCart { .. }
                | CartError::NoCartEntry { .. }
        )
    }

    /// Caller-input errors answer with a 400-style detail; the rest are server faults.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CartError::ActorCommunicationError(_))
    }

    /// Structured detail object for the error response.
    pub fn detail(&self) -> Value {
        let msg = self.to_string();
        match self {
            CartError::UnknownProduct { product_id }
            | CartError::NotInCart { product_id }
            | CartError::NoCartEntry { product_id } => {
                json!({ "msg": msg, "product_id": product_id })
            }
            CartError::InsufficientStock {
                product_id,
                available,
                requested,
            } => json!({
                "msg": msg,
                "product_id": product_id,
                "available_quantity": available,
                "selected_quantity": requested,
            }),
            CartError::Unavailable { product_id } => json!({
                "msg": msg,
                "product_id": product_id,
                "available_status": "no",
            }),
            CartError::InvalidQuantity {
                product_id,
                quantity,
            } => json!({
                "msg": msg,
                "product_id": product_id,
                "selected_quantity": quantity,
            }),
            CartError::ActorCommunicationError(_) => json!({ "msg": msg }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_detail_carries_quantities() {
        let err = CartError::InsufficientStock {
            product_id: ProductId(1),
            available: 1,
            requested: 20,
        };
        assert_eq!(
            err.detail(),
            json!({
                "msg": "Quantity selected is more than the available quantity",
                "product_id": 1,
                "available_quantity": 1,
                "selected_quantity": 20,
            })
        );
        assert!(err.is_client_error());
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_in_cart_detail_names_the_product() {
        let err = CartError::NotInCart {
            product_id: ProductId(4),
        };
        assert_eq!(
            err.detail(),
            json!({ "msg": "The product with id 4 is not in your cart.", "product_id": 4 })
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn update_without_cart_entry_has_its_own_message() {
        let err = CartError::NoCartEntry {
            product_id: ProductId(4),
        };
        assert_eq!(
            err.detail(),
            json!({ "msg": "Product id not in cart", "product_id": 4 })
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn unavailable_detail_reports_status() {
        let detail = CartError::Unavailable {
            product_id: ProductId(3),
        }
        .detail();
        assert_eq!(detail["available_status"], "no");
    }
}
