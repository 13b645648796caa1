//! Delivery of verification mails.
//!
//! The account actor only knows the [`OtpMailer`] trait. [`OutboxMailer`] is the
//! in-process implementation used by the demo binary and the tests: it logs each
//! message and keeps it for inspection.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct OtpMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("mail delivery failed: {0}")]
pub struct MailError(pub String);

#[async_trait]
pub trait OtpMailer: Send + Sync {
    /// Sender address put on every message.
    fn from_address(&self) -> &str;

    async fn send(&self, message: OtpMessage) -> Result<(), MailError>;
}

/// Records messages instead of delivering them.
#[derive(Debug, Clone)]
pub struct OutboxMailer {
    from: String,
    outbox: Arc<Mutex<Vec<OtpMessage>>>,
}

impl OutboxMailer {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            outbox: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every message sent so far, oldest first.
    pub async fn sent(&self) -> Vec<OtpMessage> {
        self.outbox.lock().await.clone()
    }

    /// Most recent message addressed to `to`.
    pub async fn last_to(&self, to: &str) -> Option<OtpMessage> {
        self.outbox
            .lock()
            .await
            .iter()
            .rev()
            .find(|message| message.to == to)
            .cloned()
    }
}

#[async_trait]
impl OtpMailer for OutboxMailer {
    fn from_address(&self) -> &str {
        &self.from
    }

    async fn send(&self, message: OtpMessage) -> Result<(), MailError> {
        info!(from = %message.from, to = %message.to, subject = %message.subject, "Mail queued");
        self.outbox.lock().await.push(message);
        Ok(())
    }
}
