// src/web/handlers/application.rs
//! Job-application intake: multipart form with an attached CV.

use crate::environment::MailConfig;
use crate::mailer::{EmailAttachment, Mailer, OutboundEmail};
use crate::templates::application_email_html;
use crate::web::types::{ApplicationFields, ApplicationForm, IntakeError, SendResponse};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rocket::form::Form;
use rocket::post;
use rocket::serde::json::Json;
use rocket::State;
use std::collections::HashMap;
use tracing::{error, info};

use super::EMAIL_SUBJECT;

pub const MAX_CV_BYTES: u64 = 2 * 1024 * 1024;

/// Catch-all POST: every path other than `/riders` is treated as a
/// job-application submission.
#[post("/<_..>", data = "<upload>")]
pub async fn submit_application(
    mut upload: Form<ApplicationForm<'_>>,
    config: &State<MailConfig>,
    mailer: &State<Box<dyn Mailer>>,
) -> Result<Json<SendResponse>, IntakeError> {
    let mut errors = HashMap::new();

    for (name, value) in [
        ("role", &upload.role),
        ("motivation", &upload.motivation),
        ("projects", &upload.projects),
        ("message", &upload.message),
    ] {
        match value {
            Some(text) if !text.trim().is_empty() => {}
            _ => {
                errors.insert(name.to_string(), format!("{} is required", name));
            }
        }
    }

    let cv = match upload.cv.as_mut() {
        Some(file) => {
            let is_pdf = file.content_type().map_or(false, |ct| ct.is_pdf());
            if !is_pdf {
                errors.insert("cv".to_string(), "cv must be a PDF document".to_string());
                None
            } else if file.len() > MAX_CV_BYTES {
                errors.insert("cv".to_string(), "cv must not exceed 2 MiB".to_string());
                None
            } else {
                Some(file)
            }
        }
        None => {
            errors.insert("cv".to_string(), "cv is required".to_string());
            None
        }
    };

    let (Some(cv), true) = (cv, errors.is_empty()) else {
        info!("Rejected job application: {:?}", errors.keys());
        return Err(IntakeError::validation(errors));
    };

    // Rocket sanitizes uploaded file names and drops the extension.
    let raw_name = cv.raw_name().and_then(|n| n.as_str()).unwrap_or("cv");
    let filename = if raw_name.to_lowercase().ends_with(".pdf") {
        raw_name.to_string()
    } else {
        format!("{}.pdf", raw_name)
    };

    // TempFile content may live in memory or on disk; persist then read
    // covers both.
    let temp_path = std::env::temp_dir().join(format!("cv_intake_{}", uuid::Uuid::new_v4()));

    if let Err(e) = cv.persist_to(&temp_path).await {
        error!("Failed to store uploaded CV: {}", e);
        return Err(IntakeError::send_failure("Failed to process uploaded file"));
    }

    let cv_bytes = match tokio::fs::read(&temp_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            let _ = tokio::fs::remove_file(&temp_path).await;
            error!("Failed to read uploaded CV: {}", e);
            return Err(IntakeError::send_failure("Failed to process uploaded file"));
        }
    };

    let _ = tokio::fs::remove_file(&temp_path).await;

    let fields = ApplicationFields {
        role: upload.role.clone().unwrap_or_default(),
        motivation: upload.motivation.clone().unwrap_or_default(),
        projects: upload.projects.clone().unwrap_or_default(),
        message: upload.message.clone().unwrap_or_default(),
    };

    let email = OutboundEmail {
        from: config.sender.clone(),
        to: config.recipient.clone(),
        subject: EMAIL_SUBJECT.to_string(),
        html: application_email_html(&fields),
        attachments: Some(vec![EmailAttachment {
            filename,
            content: BASE64.encode(&cv_bytes),
        }]),
    };

    match mailer.send(&email).await {
        Ok(()) => {
            info!("Relayed job application for role: {}", fields.role);
            Ok(Json(SendResponse::sent()))
        }
        Err(e) => {
            error!("Job application send failed: {:#}", e);
            Err(IntakeError::send_failure("Failed to send email"))
        }
    }
}
