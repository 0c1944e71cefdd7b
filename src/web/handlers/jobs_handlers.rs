// src/web/handlers/jobs_handlers.rs
use crate::core::ListingService;
use crate::web::types::{JobsQuery, JobsResponse};

use rocket::State;
use tracing::info;

pub async fn list_jobs_handler(query: JobsQuery, listing: &State<ListingService>) -> JobsResponse {
    let request = query.into_request();

    info!(
        "Listing jobs for '{}' in '{}' (page {}, company '{}', type '{}')",
        request.criteria.query,
        request.criteria.location,
        request.page,
        request.criteria.company,
        request.criteria.employment_type
    );

    listing.list(&request).await.into()
}
