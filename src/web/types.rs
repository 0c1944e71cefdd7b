// src/web/types.rs - request parsing and response shapes of the HTTP surface

use rocket::form::FromForm;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::serde::Serialize;
use rocket::{Request, Response};

use crate::core::count_cache::clamp_aggregate_pages;
use crate::core::filters::{FilterCriteria, DEFAULT_LOCATION, DEFAULT_QUERY};
use crate::core::listing::{ListingPage, ListingRequest, DEFAULT_PAGE_SIZE};
use crate::types::Job;

pub const HAS_MORE_HEADER: &str = "X-Has-More";
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// Query string of `GET /jobs`. Everything arrives as text so that a malformed
/// number degrades to its default instead of rejecting the request.
#[derive(Debug, Default, FromForm)]
pub struct JobsQuery {
    pub q: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    #[field(name = "type")]
    pub employment_type: Option<String>,
    #[field(name = "salaryMin")]
    pub salary_min: Option<String>,
    #[field(name = "salaryMax")]
    pub salary_max: Option<String>,
    pub page: Option<String>,
    #[field(name = "pageSize")]
    pub page_size: Option<String>,
    #[field(name = "aggregatePages")]
    pub aggregate_pages: Option<String>,
}

impl JobsQuery {
    pub fn into_request(self) -> ListingRequest {
        ListingRequest {
            criteria: FilterCriteria {
                query: text_or(self.q, DEFAULT_QUERY),
                location: text_or(self.location, DEFAULT_LOCATION),
                company: text_or(self.company, ""),
                employment_type: text_or(self.employment_type, ""),
                salary_min: parse_amount(self.salary_min),
                salary_max: parse_amount(self.salary_max),
            },
            page: parse_positive(self.page, 1),
            page_size: parse_positive(self.page_size, DEFAULT_PAGE_SIZE),
            aggregate_pages: clamp_aggregate_pages(
                self.aggregate_pages
                    .and_then(|v| v.trim().parse::<i64>().ok()),
            ),
        }
    }
}

fn text_or(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_amount(value: Option<String>) -> Option<f64> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

fn parse_positive(value: Option<String>, default: u32) -> u32 {
    match value.and_then(|v| v.trim().parse::<i64>().ok()) {
        Some(n) => n.clamp(1, u32::MAX as i64) as u32,
        None => default,
    }
}

/// JSON array of jobs plus the out-of-band paging headers.
pub struct JobsResponse {
    pub jobs: Vec<Job>,
    pub has_more: bool,
    pub total_count: usize,
}

impl From<ListingPage> for JobsResponse {
    fn from(page: ListingPage) -> Self {
        Self {
            jobs: page.jobs,
            has_more: page.has_more,
            total_count: page.total_count,
        }
    }
}

impl<'r> Responder<'r, 'static> for JobsResponse {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        Response::build_from(Json(self.jobs).respond_to(request)?)
            .raw_header(HAS_MORE_HEADER, self.has_more.to_string())
            .raw_header(TOTAL_COUNT_HEADER, self.total_count.to_string())
            .ok()
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
}

impl ErrorResponse {
    pub fn new(error: &str, error_code: &str) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            error_code: error_code.to_string(),
        }
    }
}
