//! Error types for the Account actor.

use serde_json::{json, Value};
use thiserror::Error;

/// Errors that can occur during registration and OTP verification.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    #[error("value is not a valid email address: {email}")]
    InvalidEmail { email: String },

    #[error("password must be at least 8 characters")]
    WeakPassword,

    #[error("otp must be exactly 6 characters, got {length}")]
    MalformedOtp { length: usize },

    /// No account with this id.
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("Account is already verified.")]
    AlreadyVerified,

    #[error("The OTP entered is not correct. Check your email for OTP.")]
    InvalidOtp { otp_entered: String },

    /// The password could not be hashed; nothing was stored.
    #[error("Failed to hash password: {0}")]
    Hashing(String),

    /// The mailer could not deliver the OTP; the account was not stored.
    #[error("Failed to send OTP: {0}")]
    Delivery(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl AccountError {
    pub fn is_client_error(&self) -> bool {
        !matches!(
            self,
            AccountError::Hashing(_)
                | AccountError::Delivery(_)
                | AccountError::ActorCommunicationError(_)
        )
    }

    pub fn detail(&self) -> Value {
        match self {
            AccountError::InvalidOtp { otp_entered } => {
                json!({ "msg": self.to_string(), "otp_entered": otp_entered })
            }
            other => json!({ "msg": other.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_otp_detail_echoes_input() {
        let err = AccountError::InvalidOtp {
            otp_entered: "123456".to_string(),
        };
        assert_eq!(
            err.detail(),
            json!({
                "msg": "The OTP entered is not correct. Check your email for OTP.",
                "otp_entered": "123456",
            })
        );
        assert!(err.is_client_error());
        assert!(!AccountError::Delivery("smtp down".to_string()).is_client_error());
    }
}
