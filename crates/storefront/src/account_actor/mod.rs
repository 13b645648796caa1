//! # Account Actor
//!
//! OTP-gated registration. An account is created inactive, its one-time password
//! is mailed through the injected [`OtpMailer`], and the [`AccountAction::Verify`]
//! action activates it.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](storefront_actor::ActorEntity) implementation for
//!   [`Account`]
//! - [`actions`] - [`AccountAction`] and [`AccountActionResult`]
//! - [`mailer`] - the [`OtpMailer`] collaborator and the in-process [`OutboxMailer`]
//! - [`otp`] - code generation and the mail body
//! - [`password`] - salted password hashes
//! - [`error`] - [`AccountError`]

pub mod actions;
pub mod entity;
pub mod error;
pub mod mailer;
pub mod otp;
pub mod password;

pub use actions::*;
pub use error::*;
pub use mailer::*;

use crate::model::Account;
use storefront_actor::{ResourceActor, ResourceClient};

/// Creates a new Account actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Account>, ResourceClient<Account>) {
    ResourceActor::new(buffer_size)
}
