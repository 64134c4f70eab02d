// src/mailer.rs
//! Transactional email provider client.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Hosted provider send endpoint, overridable through `MAIL_API_URL`.
pub const DEFAULT_API_URL: &str = "https://api.resend.com/emails";

const SEND_TIMEOUT_SECS: u64 = 30;

/// The send request the provider accepts.
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<EmailAttachment>>,
}

/// Base64-encoded file attached to an outbound email.
#[derive(Debug, Clone, Serialize)]
pub struct EmailAttachment {
    pub filename: String,
    pub content: String,
}

/// Structured error body the provider returns on rejected sends.
#[derive(Debug, Deserialize)]
pub struct ProviderError {
    #[serde(rename = "statusCode")]
    pub status_code: Option<u16>,
    pub name: Option<String>,
    pub message: String,
}

/// Seam between the intake handlers and the email provider.
#[rocket::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<()>;
}

/// Provider client backed by the hosted HTTP API.
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl HttpMailer {
    pub fn new(api_url: String, api_key: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(SEND_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url,
            api_key,
        })
    }
}

#[rocket::async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<()> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .context("HTTP request to email provider failed")?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        match serde_json::from_str::<ProviderError>(&error_text) {
            Ok(provider) => {
                error!(
                    "Email provider rejected send ({}): {} {}",
                    status,
                    provider.name.as_deref().unwrap_or("error"),
                    provider.message
                );
                anyhow::bail!(
                    "Provider returned error status {}: {}",
                    status,
                    provider.message
                )
            }
            Err(_) => {
                error!("Email provider rejected send ({}): {}", status, error_text);
                anyhow::bail!("Provider returned error status {}: {}", status, error_text)
            }
        }
    }
}
