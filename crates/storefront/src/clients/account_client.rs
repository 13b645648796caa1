use crate::account_actor::{AccountAction, AccountActionResult, AccountError};
use crate::model::{Account, AccountId, Registration, RegistrationReceipt, Verified};
use async_trait::async_trait;
use storefront_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Account actor.
#[derive(Clone)]
pub struct AccountClient {
    inner: ResourceClient<Account>,
}

impl AccountClient {
    pub fn new(inner: ResourceClient<Account>) -> Self {
        Self { inner }
    }

    /// Creates an inactive account and mails its OTP.
    #[instrument(skip(self, registration), fields(email = %registration.email))]
    pub async fn register(
        &self,
        registration: Registration,
    ) -> Result<RegistrationReceipt, AccountError> {
        debug!("Sending request");
        let id = self
            .inner
            .create(registration)
            .await
            .map_err(Self::map_error)?;
        Ok(RegistrationReceipt::new(id))
    }

    /// Activates the account if `otp` matches the mailed code.
    #[instrument(skip(self, otp))]
    pub async fn verify(&self, user_id: AccountId, otp: &str) -> Result<Verified, AccountError> {
        let action = AccountAction::verify(otp)?;
        debug!("Sending request");
        match self
            .inner
            .perform_action(user_id, action)
            .await
            .map_err(Self::map_error)?
        {
            AccountActionResult::Verify(verified) => Ok(verified),
        }
    }
}

#[async_trait]
impl ActorClient<Account> for AccountClient {
    type Error = AccountError;

    fn inner(&self) -> &ResourceClient<Account> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<AccountError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => AccountError::NotFound(id),
            Err(e) => AccountError::ActorCommunicationError(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_actor::mock::MockClient;

    #[tokio::test]
    async fn malformed_otp_never_reaches_the_actor() {
        let mock = MockClient::<Account>::new();
        let client = AccountClient::new(mock.client());

        let err = client.verify(AccountId(1), "12").await.unwrap_err();
        assert_eq!(err, AccountError::MalformedOtp { length: 2 });
        mock.verify();
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_action(AccountId(9))
            .return_err(FrameworkError::NotFound("user_9".to_string()));
        let client = AccountClient::new(mock.client());

        let err = client.verify(AccountId(9), "123456").await.unwrap_err();
        assert_eq!(err, AccountError::NotFound("user_9".to_string()));
        mock.verify();
    }

    #[tokio::test]
    async fn register_returns_receipt() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_create().return_ok(AccountId(4));
        let client = AccountClient::new(mock.client());

        let receipt = client
            .register(Registration {
                email: "ada@example.com".to_string(),
                password: "password1".to_string(),
                phone: None,
            })
            .await
            .unwrap();
        assert_eq!(receipt, RegistrationReceipt::new(AccountId(4)));
        mock.verify();
    }
}
