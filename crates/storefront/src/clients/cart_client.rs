//! # Cart Client
//!
//! Typed API over the ledger actor. Each method sends one [`CartAction`] to the
//! ledger it was built for and turns the reply into a cart response or a
//! [`CartError`].

use crate::ledger_actor::{CartAction, CartActionResult, CartError};
use crate::model::{CartItems, CartResponse, Ledger, LedgerId, ProductId, StockRecord};
use async_trait::async_trait;
use storefront_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for the cart of one ledger.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Ledger>,
    ledger_id: LedgerId,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Ledger>, ledger_id: LedgerId) -> Self {
        Self { inner, ledger_id }
    }

    pub fn ledger_id(&self) -> LedgerId {
        self.ledger_id
    }

    async fn act(&self, action: CartAction) -> Result<CartActionResult, CartError> {
        self.inner
            .perform_action(self.ledger_id, action)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartResponse, CartError> {
        debug!("Sending request");
        match self.act(CartAction::Add { product_id, quantity }).await? {
            CartActionResult::Add(items) => Ok(CartResponse::added(items)),
            other => Err(unexpected("Add", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<CartResponse, CartError> {
        debug!("Sending request");
        match self.act(CartAction::Update { product_id, quantity }).await? {
            CartActionResult::Update(items) => Ok(CartResponse::updated(items)),
            other => Err(unexpected("Update", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, product_id: ProductId) -> Result<(), CartError> {
        debug!("Sending request");
        match self.act(CartAction::Remove { product_id }).await? {
            CartActionResult::Remove(()) => Ok(()),
            other => Err(unexpected("Remove", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn cart_items(&self) -> Result<CartItems, CartError> {
        match self.act(CartAction::Items).await? {
            CartActionResult::Items(items) => Ok(items),
            other => Err(unexpected("Items", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn stock_of(&self, product_id: ProductId) -> Result<Option<StockRecord>, CartError> {
        match self.act(CartAction::Stock(product_id)).await? {
            CartActionResult::Stock(record) => Ok(record),
            other => Err(unexpected("Stock", other)),
        }
    }
}

fn unexpected(action: &str, result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("{action} answered with {result:?}"))
}

#[async_trait]
impl ActorClient<Ledger> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Ledger> {
        &self.inner
    }

    /// Ledger errors come back as themselves; runtime failures become
    /// `ActorCommunicationError`.
    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<CartError>()
            .unwrap_or_else(|e| CartError::ActorCommunicationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CartEntry;
    use storefront_actor::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn add_item_sends_add_and_wraps_cart() {
        let (client, mut receiver) = create_mock_client::<Ledger>(10);
        let cart = CartClient::new(client, LedgerId(1));

        let task = tokio::spawn(async move { cart.add_item(ProductId(2), 3).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, LedgerId(1));
        assert!(matches!(
            action,
            CartAction::Add {
                product_id: ProductId(2),
                quantity: 3
            }
        ));

        let mut items = CartItems::new();
        items.insert(ProductId(2), CartEntry::new(ProductId(2), 3));
        responder.send(Ok(CartActionResult::Add(items.clone()))).unwrap();

        let response = task.await.unwrap().unwrap();
        assert_eq!(response, CartResponse::added(items));
    }

    #[tokio::test]
    async fn ledger_errors_are_recovered() {
        let (client, mut receiver) = create_mock_client::<Ledger>(10);
        let cart = CartClient::new(client, LedgerId(1));

        let task = tokio::spawn(async move { cart.update_item(ProductId(1), 20).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        let refusal = CartError::InsufficientStock {
            product_id: ProductId(1),
            available: 1,
            requested: 20,
        };
        responder
            .send(Err(FrameworkError::EntityError(Box::new(refusal.clone()))))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap_err(), refusal);
    }

    #[tokio::test]
    async fn runtime_failures_become_communication_errors() {
        let (client, receiver) = create_mock_client::<Ledger>(10);
        drop(receiver);
        let cart = CartClient::new(client, LedgerId(1));

        let err = cart.delete_item(ProductId(1)).await.unwrap_err();
        assert_eq!(
            err,
            CartError::ActorCommunicationError("Actor closed".to_string())
        );
    }

    #[tokio::test]
    async fn mismatched_result_is_reported() {
        let (client, mut receiver) = create_mock_client::<Ledger>(10);
        let cart = CartClient::new(client, LedgerId(1));

        let task = tokio::spawn(async move { cart.delete_item(ProductId(1)).await });
        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder.send(Ok(CartActionResult::Stock(None))).unwrap();

        assert!(matches!(
            task.await.unwrap(),
            Err(CartError::ActorCommunicationError(_))
        ));
    }
}
