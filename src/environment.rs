// src/environment.rs
use anyhow::{Context, Result};

use crate::mailer::DEFAULT_API_URL;

/// Immutable mail relay configuration, read once from the environment at
/// startup and threaded into the handlers as managed state.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub api_url: String,
    pub api_key: String,
    pub sender: String,
    pub recipient: String,
}

impl MailConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_url: std::env::var("MAIL_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            api_key: std::env::var("MAIL_API_KEY")
                .context("MAIL_API_KEY environment variable not set")?,
            sender: std::env::var("MAIL_SENDER")
                .context("MAIL_SENDER environment variable not set")?,
            recipient: std::env::var("MAIL_RECIPIENT")
                .context("MAIL_RECIPIENT environment variable not set")?,
        })
    }
}
