//! ActorEntity implementation for [`Account`].
//!
//! `from_create_params` validates the form, hashes the password and draws the OTP.
//! `on_create` mails the OTP; if the mailer fails the account is discarded.

use super::actions::{AccountAction, AccountActionResult};
use super::error::AccountError;
use super::mailer::{OtpMailer, OtpMessage};
use super::otp::{generate_otp, render_otp_email};
use super::password::hash_password;
use crate::model::{Account, AccountId, Registration, Verified};
use crate::validation::is_valid_email;
use async_trait::async_trait;
use std::sync::Arc;
use storefront_actor::ActorEntity;
use tracing::info;

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[async_trait]
impl ActorEntity for Account {
    type Id = AccountId;
    type Create = Registration;
    type Update = ();
    type Action = AccountAction;
    type ActionResult = AccountActionResult;
    type Context = Arc<dyn OtpMailer>;
    type Error = AccountError;

    fn from_create_params(id: AccountId, params: Registration) -> Result<Self, Self::Error> {
        if !is_valid_email(&params.email) {
            return Err(AccountError::InvalidEmail {
                email: params.email,
            });
        }
        if params.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AccountError::WeakPassword);
        }

        let password_hash =
            hash_password(&params.password).map_err(|e| AccountError::Hashing(e.to_string()))?;

        Ok(Self {
            id,
            email: params.email,
            password_hash,
            phone: params.phone,
            is_active: false,
            otp: Some(generate_otp()),
        })
    }

    async fn on_create(&mut self, mailer: &Arc<dyn OtpMailer>) -> Result<(), Self::Error> {
        let Some(otp) = self.otp.as_deref() else {
            return Ok(());
        };
        let message = OtpMessage {
            from: mailer.from_address().to_string(),
            to: self.email.clone(),
            subject: "Activate your account".to_string(),
            html: render_otp_email(&self.email, otp),
        };
        mailer
            .send(message)
            .await
            .map_err(|e| AccountError::Delivery(e.to_string()))
    }

    async fn on_update(
        &mut self,
        _update: (),
        _ctx: &Arc<dyn OtpMailer>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: AccountAction,
        _ctx: &Arc<dyn OtpMailer>,
    ) -> Result<AccountActionResult, Self::Error> {
        match action {
            AccountAction::Verify { otp } => {
                if self.is_active {
                    return Err(AccountError::AlreadyVerified);
                }
                if self.otp.as_deref() != Some(otp.as_str()) {
                    return Err(AccountError::InvalidOtp { otp_entered: otp });
                }
                self.otp = None;
                self.is_active = true;
                info!(id = %self.id, "Account activated");
                Ok(AccountActionResult::Verify(Verified::default()))
            }
        }
    }
}
