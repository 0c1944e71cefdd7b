// src/web/handlers/system_handlers.rs
use crate::core::ListingService;
use crate::web::types::ErrorResponse;

use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

pub async fn health_handler(listing: &State<ListingService>) -> Json<&'static str> {
    let mode = if listing.is_live() { "live" } else { "offline" };
    info!("Health check ({} mode)", mode);
    Json("OK")
}

pub fn not_found_handler() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Resource not found", "NOT_FOUND"))
}

pub fn internal_error_handler() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error", "INTERNAL_ERROR"))
}
