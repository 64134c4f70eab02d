// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::environment::MailConfig;
use crate::mailer::Mailer;
use anyhow::Result;
use rocket::catchers;
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::{catch, delete, get, options, patch, put, routes, Build, Rocket};
use rocket::{Request, Response};

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "POST, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

// Handle OPTIONS requests for CORS preflight
#[options("/<_..>")]
pub async fn preflight() -> Status {
    Status::NoContent
}

// Only POST (and preflight OPTIONS) are part of the intake surface.
#[get("/<_..>")]
pub async fn method_not_allowed_get() -> Custom<Json<ErrorResponse>> {
    method_not_allowed()
}

#[put("/<_..>")]
pub async fn method_not_allowed_put() -> Custom<Json<ErrorResponse>> {
    method_not_allowed()
}

#[patch("/<_..>")]
pub async fn method_not_allowed_patch() -> Custom<Json<ErrorResponse>> {
    method_not_allowed()
}

#[delete("/<_..>")]
pub async fn method_not_allowed_delete() -> Custom<Json<ErrorResponse>> {
    method_not_allowed()
}

fn method_not_allowed() -> Custom<Json<ErrorResponse>> {
    Custom(
        Status::MethodNotAllowed,
        Json(ErrorResponse::new("Method not allowed")),
    )
}

// Every non-POST method has a catch-all route, so only POSTs fall through
// routing — and they do so when the body could not be read as the expected
// form or JSON payload (the guards surface this as 404, 415, or 422). The
// default catcher converts all of those to the JSON 400 shape.
#[catch(default)]
pub fn malformed_body(_status: Status, _req: &Request) -> Custom<Json<ErrorResponse>> {
    Custom(
        Status::BadRequest,
        Json(ErrorResponse::new("Malformed request body")),
    )
}

#[catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error"))
}

/// Assemble the rocket instance. Form limits are raised above the 2 MiB CV
/// cap so the business limit, not the framework default, rejects oversized
/// uploads.
pub fn build_rocket(config: MailConfig, mailer: Box<dyn Mailer>) -> Rocket<Build> {
    let limits = Limits::default()
        .limit("file", 8.mebibytes())
        .limit("data-form", 10.mebibytes());

    let figment = rocket::Config::figment().merge(("limits", limits));

    rocket::custom(figment)
        .attach(Cors)
        .manage(config)
        .manage(mailer)
        .mount(
            "/",
            routes![
                handlers::register_rider,
                handlers::submit_application,
                preflight,
                method_not_allowed_get,
                method_not_allowed_put,
                method_not_allowed_patch,
                method_not_allowed_delete,
            ],
        )
        .register("/", catchers![malformed_body, internal_error])
}

pub async fn start_web_server(config: MailConfig, mailer: Box<dyn Mailer>) -> Result<()> {
    let _rocket = build_rocket(config, mailer).launch().await?;
    Ok(())
}
