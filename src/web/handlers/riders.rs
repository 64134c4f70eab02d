// src/web/handlers/riders.rs
//! Rider-registration intake: JSON payload, no attachment.

use crate::environment::MailConfig;
use crate::mailer::{Mailer, OutboundEmail};
use crate::templates::rider_email_html;
use crate::web::types::{IntakeError, RiderRegistration, SendResponse};
use rocket::post;
use rocket::serde::json::{self, Json};
use rocket::State;
use std::collections::HashMap;
use tracing::{error, info, warn};

use super::EMAIL_SUBJECT;

#[post("/riders", data = "<request>")]
pub async fn register_rider(
    request: Result<Json<RiderRegistration>, json::Error<'_>>,
    config: &State<MailConfig>,
    mailer: &State<Box<dyn Mailer>>,
) -> Result<Json<SendResponse>, IntakeError> {
    let rider = match request {
        Ok(Json(body)) => body,
        Err(e) => {
            warn!("Rejected rider registration with unreadable body: {}", e);
            return Err(IntakeError::validation(HashMap::from([(
                "body".to_string(),
                "Request body must be a JSON object".to_string(),
            )])));
        }
    };

    let details = rider.validate().map_err(|errors| {
        info!("Rejected rider registration: {:?}", errors.keys());
        IntakeError::validation(errors)
    })?;

    let email = OutboundEmail {
        from: config.sender.clone(),
        to: config.recipient.clone(),
        subject: EMAIL_SUBJECT.to_string(),
        html: rider_email_html(&details),
        attachments: None,
    };

    match mailer.send(&email).await {
        Ok(()) => {
            info!("Relayed rider registration for {} {}", details.fname, details.lname);
            Ok(Json(SendResponse::sent()))
        }
        Err(e) => {
            error!("Rider registration send failed: {:#}", e);
            Err(IntakeError::send_failure("Failed to send email"))
        }
    }
}
