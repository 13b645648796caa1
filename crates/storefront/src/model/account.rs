use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display};

/// Type-safe identifier for registered accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(pub u32);

impl From<u32> for AccountId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// A registered account. Inactive until its one-time password is verified.
#[derive(Clone, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub(crate) otp: Option<String>,
}

impl Account {
    pub fn awaiting_verification(&self) -> bool {
        self.otp.is_some()
    }
}

impl Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("is_active", &self.is_active)
            .finish_non_exhaustive()
    }
}

/// Payload for the registration form.
#[derive(Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

impl Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phone", &self.phone)
            .finish()
    }
}

/// Reply to a successful registration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationReceipt {
    pub user_id: AccountId,
    pub msg: String,
}

impl RegistrationReceipt {
    pub fn new(user_id: AccountId) -> Self {
        Self {
            user_id,
            msg: "Registration successful. Check your email to verify OTP.".to_string(),
        }
    }
}

/// Reply to a successful verification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verified {
    pub message: String,
}

impl Default for Verified {
    fn default() -> Self {
        Self {
            message: "Your account is activated successfully.".to_string(),
        }
    }
}
