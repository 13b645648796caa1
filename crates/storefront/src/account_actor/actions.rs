use super::error::AccountError;
use super::otp::OTP_LENGTH;
use crate::model::Verified;
use std::fmt::Debug;

pub enum AccountAction {
    /// Activate the account if `otp` matches the one that was mailed.
    Verify { otp: String },
}

impl AccountAction {
    /// Builds a `Verify` action, rejecting codes of the wrong length up front.
    pub fn verify(otp: impl Into<String>) -> Result<Self, AccountError> {
        let otp = otp.into();
        let length = otp.chars().count();
        if length != OTP_LENGTH {
            return Err(AccountError::MalformedOtp { length });
        }
        Ok(AccountAction::Verify { otp })
    }
}

// Keep one-time passwords out of the logs.
impl Debug for AccountAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountAction::Verify { .. } => f.write_str("Verify { otp: <redacted> }"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AccountActionResult {
    Verify(Verified),
}
