use anyhow::Result;
use form_intake::environment::MailConfig;
use form_intake::mailer::HttpMailer;
use form_intake::start_web_server;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = MailConfig::from_env()?;

    info!("Starting Virgas form intake server");
    info!("Provider endpoint: {}", config.api_url);
    info!("Relaying submissions from {} to {}", config.sender, config.recipient);

    let mailer = HttpMailer::new(config.api_url.clone(), config.api_key.clone())?;

    start_web_server(config, Box::new(mailer)).await
}
