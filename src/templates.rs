// src/templates.rs
//! Pure rendering helpers mapping validated payloads to HTML email bodies.
//! Every interpolated value is escaped before embedding.

use crate::web::types::{ApplicationFields, RiderDetails};

/// Escape a value for embedding into HTML text or attribute content.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render the job-application notification body. The CV itself travels as an
/// attachment, not inline.
pub fn application_email_html(application: &ApplicationFields) -> String {
    format!(
        "<html><body>\
         <h2>New Job Application</h2>\
         <p><strong>Role:</strong> {}</p>\
         <p><strong>Motivation:</strong> {}</p>\
         <p><strong>Projects:</strong> {}</p>\
         <p><strong>Message:</strong> {}</p>\
         <p>The candidate's CV is attached as a PDF.</p>\
         </body></html>",
        escape_html(&application.role),
        escape_html(&application.motivation),
        escape_html(&application.projects),
        escape_html(&application.message),
    )
}

/// Render the rider-registration notification body.
pub fn rider_email_html(rider: &RiderDetails) -> String {
    let email = rider.email.as_deref().unwrap_or("not provided");

    format!(
        "<html><body>\
         <h2>New Rider Registration</h2>\
         <p><strong>First name:</strong> {}</p>\
         <p><strong>Last name:</strong> {}</p>\
         <p><strong>Phone:</strong> {}</p>\
         <p><strong>Email:</strong> {}</p>\
         <p><strong>Gender:</strong> {}</p>\
         <p><strong>Date of birth:</strong> {}</p>\
         </body></html>",
        escape_html(&rider.fname),
        escape_html(&rider.lname),
        escape_html(&rider.phone),
        escape_html(email),
        escape_html(&rider.gender),
        escape_html(&rider.dob),
    )
}
