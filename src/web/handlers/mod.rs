pub mod application;
pub mod riders;

pub use application::submit_application;
pub use riders::register_rider;

/// Subject line for every relayed submission.
pub const EMAIL_SUBJECT: &str = "New Virgas Job Application";
