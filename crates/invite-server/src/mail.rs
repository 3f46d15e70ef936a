//! Outbound transactional mail for the contact form.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::MailSettings;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail relay is not configured")]
    NotConfigured,
    #[error("mail relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("mail relay rejected the message with status {0}")]
    Rejected(u16),
}

/// A validated contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn subject(&self) -> String {
        format!("New contact message from {}", self.name)
    }

    pub fn text_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        )
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError>;
}

/// Used when the mail variables are absent; every send fails.
pub struct UnconfiguredMailer;

#[async_trait]
impl Mailer for UnconfiguredMailer {
    async fn send(&self, _message: &ContactMessage) -> Result<(), MailError> {
        Err(MailError::NotConfigured)
    }
}

/// JSON-over-HTTPS mail API client.
pub struct HttpMailer {
    client: reqwest::Client,
    settings: MailSettings,
}

/// Request body understood by the relay.
#[derive(Serialize)]
struct OutboundMail<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: String,
    text: String,
}

impl HttpMailer {
    pub fn new(settings: MailSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        let body = OutboundMail {
            from: &self.settings.from,
            to: [&self.settings.to],
            reply_to: &message.email,
            subject: message.subject(),
            text: message.text_body(),
        };
        let resp = self
            .client
            .post(&self.settings.api_url)
            .bearer_auth(&self.settings.api_key)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(MailError::Rejected(status.as_u16()));
        }
        log::info!("[mail] relayed contact message from {}", message.email);
        Ok(())
    }
}

/// Pick the relay for the given settings.
pub fn mailer_from(settings: Option<MailSettings>) -> Box<dyn Mailer> {
    match settings {
        Some(s) => Box::new(HttpMailer::new(s)),
        None => {
            log::warn!("[mail] MAIL_* variables missing; contact form will fail");
            Box::new(UnconfiguredMailer)
        }
    }
}
