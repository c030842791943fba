// src/web/mod.rs

pub mod handlers;
pub mod page;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::form::Form;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{catch, catchers, get, post, routes, Build, Rocket, State};
use tracing::info;

use crate::config::AppConfig;
use crate::core::ServiceClient;

#[get("/")]
pub async fn index() -> RawHtml<String> {
    handlers::index_handler().await
}

#[post("/", data = "<upload>")]
pub async fn submit_cv(
    upload: Form<CvSubmitForm<'_>>,
    service: &State<ServiceClient>,
) -> RawHtml<String> {
    handlers::submit_cv_handler(upload, service).await
}

#[get("/health")]
pub async fn health() -> Json<&'static str> {
    handlers::health_handler().await
}

// Error catchers
#[catch(413)]
pub fn payload_too_large() -> RawHtml<String> {
    handlers::rejected_upload_page("The uploaded file exceeds the server's upload limit.")
}

#[catch(400)]
pub fn bad_request() -> RawHtml<String> {
    handlers::rejected_upload_page("The upload form could not be read. Please try again.")
}

#[catch(422)]
pub fn unprocessable_form() -> RawHtml<String> {
    handlers::rejected_upload_page("The upload form could not be read. Please try again.")
}

/// Assemble the rocket instance without launching it.
pub fn build_rocket(config: &AppConfig) -> Result<Rocket<Build>> {
    let service = ServiceClient::new(config.service_url.clone(), config.timeout)?;

    let file_limit = config.max_upload_mib.mebibytes();
    let limits = Limits::default()
        .limit("file", file_limit)
        .limit("data-form", file_limit + 1.mebibytes());

    let figment = rocket::Config::figment()
        .merge(("address", config.address))
        .merge(("port", config.port))
        .merge(("limits", limits));

    Ok(rocket::custom(figment)
        .manage(service)
        .register("/", catchers![payload_too_large, bad_request, unprocessable_form])
        .mount("/", routes![index, submit_cv, health]))
}

pub async fn start_web_server(config: AppConfig) -> Result<()> {
    let rocket = build_rocket(&config)?;

    info!("Starting CV intake server");
    info!("Server: http://{}:{}", config.address, config.port);
    info!("CV Service: {}", config.service_url);

    rocket
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket failed to launch: {}", e))?;
    Ok(())
}
