pub mod environment;
pub mod mailer;
pub mod templates;
pub mod web;

pub use environment::MailConfig;
pub use web::{build_rocket, start_web_server};
