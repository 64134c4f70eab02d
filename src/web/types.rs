// src/web/types.rs

use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::Responder;
use std::collections::HashMap;

/// Multipart job-application form. Every field is optional at the form layer
/// so missing fields surface as structured validation errors instead of
/// framework-level form failures.
#[derive(FromForm)]
pub struct ApplicationForm<'f> {
    pub role: Option<String>,
    pub motivation: Option<String>,
    pub projects: Option<String>,
    pub message: Option<String>,
    pub cv: Option<TempFile<'f>>,
}

/// Validated job-application text fields, safe to render into a template.
#[derive(Debug, Clone)]
pub struct ApplicationFields {
    pub role: String,
    pub motivation: String,
    pub projects: String,
    pub message: String,
}

/// Raw rider-registration payload as posted to `/riders`. Unknown fields are
/// ignored.
#[derive(Debug, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct RiderRegistration {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    #[serde(rename = "DOB")]
    pub dob: Option<String>,
    pub fname: Option<String>,
    pub lname: Option<String>,
}

/// Validated rider-registration fields.
#[derive(Debug, Clone)]
pub struct RiderDetails {
    pub email: Option<String>,
    pub phone: String,
    pub gender: String,
    pub dob: String,
    pub fname: String,
    pub lname: String,
}

impl RiderRegistration {
    /// Validate against the rider schema, naming every invalid field.
    pub fn validate(self) -> Result<RiderDetails, HashMap<String, String>> {
        let mut errors = HashMap::new();

        let phone = self.phone.unwrap_or_default();
        if phone.trim().is_empty() {
            errors.insert("phone".to_string(), "phone is required".to_string());
        }

        let mut take = |name: &str, value: Option<String>| -> String {
            let value = value.unwrap_or_default();
            if value.chars().count() < 2 {
                errors.insert(
                    name.to_string(),
                    format!("{} must be at least 2 characters", name),
                );
            }
            value
        };

        let gender = take("gender", self.gender);
        let dob = take("DOB", self.dob);
        let fname = take("fname", self.fname);
        let lname = take("lname", self.lname);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RiderDetails {
            email: self.email.filter(|e| !e.trim().is_empty()),
            phone,
            gender,
            dob,
            fname,
            lname,
        })
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SendResponse {
    pub success: bool,
    pub message: String,
}

impl SendResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: "Email sent successfully.".to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ValidationErrorResponse {
    pub success: bool,
    pub error: String,
    pub errors: HashMap<String, String>,
}

impl ValidationErrorResponse {
    pub fn new(errors: HashMap<String, String>) -> Self {
        Self {
            success: false,
            error: "Validation failed".to_string(),
            errors,
        }
    }
}

/// Failure branches of the intake handlers.
#[derive(Responder)]
pub enum IntakeError {
    #[response(status = 400)]
    Validation(Json<ValidationErrorResponse>),
    #[response(status = 500)]
    Send(Json<ErrorResponse>),
}

impl IntakeError {
    pub fn validation(errors: HashMap<String, String>) -> Self {
        Self::Validation(Json(ValidationErrorResponse::new(errors)))
    }

    pub fn send_failure(message: &str) -> Self {
        Self::Send(Json(ErrorResponse::new(message)))
    }
}
