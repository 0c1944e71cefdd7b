// src/web/mod.rs

pub mod handlers;
pub mod services;
pub mod types;

pub use handlers::*;
pub use services::build_listing_service;
pub use types::*;

use crate::config::ConfigManager;
use crate::core::ListingService;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, routes, Build, Request, Response, Rocket, State};
use tracing::info;

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
        response.set_header(Header::new("Access-Control-Allow-Methods", "GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new(
            "Access-Control-Expose-Headers",
            format!("{}, {}", HAS_MORE_HEADER, TOTAL_COUNT_HEADER),
        ));
    }
}

#[get("/jobs?<query..>")]
pub async fn list_jobs(query: JobsQuery, listing: &State<ListingService>) -> JobsResponse {
    handlers::list_jobs_handler(query, listing).await
}

#[get("/health")]
pub async fn health(listing: &State<ListingService>) -> Json<&'static str> {
    handlers::health_handler(listing).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorResponse> {
    handlers::not_found_handler()
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    handlers::internal_error_handler()
}

/// Assemble the Rocket instance around an already wired listing service.
pub fn build_rocket(listing: ListingService, port: u16) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", "0.0.0.0"))
        .merge(("port", port));

    rocket::custom(figment)
        .attach(Cors)
        .manage(listing)
        .register("/", catchers![not_found, internal_error])
        .mount("/", routes![list_jobs, health, options])
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let listing = build_listing_service(&config)?;

    info!("Starting job search API server");
    info!("Server: http://0.0.0.0:{}", config.port);

    build_rocket(listing, config.port)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;

    Ok(())
}
