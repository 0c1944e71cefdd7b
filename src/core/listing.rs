// src/core/listing.rs
//! Orchestrates a `/jobs` listing: one upstream page, normalization,
//! filtering, the aggregate count and the has-more signal.

use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};

use super::count_cache::{CountCache, DEFAULT_AGGREGATE_PAGES};
use super::fallback::FallbackProvider;
use super::filters::{apply_filters, FilterCriteria};
use super::normalizer::normalize_jobs;
use super::upstream_client::{JobSource, UPSTREAM_PAGE_SIZE};
use crate::types::{dedup_jobs, Job};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct ListingRequest {
    pub criteria: FilterCriteria,
    pub page: u32,
    pub page_size: u32,
    pub aggregate_pages: u32,
}

impl Default for ListingRequest {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            aggregate_pages: DEFAULT_AGGREGATE_PAGES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingOrigin {
    Live,
    Offline,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct ListingPage {
    pub jobs: Vec<Job>,
    pub total_count: usize,
    pub has_more: bool,
    pub origin: ListingOrigin,
}

/// Has-more signal: the aggregate count when known, otherwise whether the raw
/// page came back full.
pub fn has_more(total: Option<usize>, raw_page_len: usize, page: u32, page_size: usize) -> bool {
    match total {
        Some(count) => count > (page as usize).saturating_mul(page_size),
        None => raw_page_len >= page_size,
    }
}

pub struct ListingService {
    source: Option<Arc<dyn JobSource>>,
    counts: CountCache,
    fallback: Arc<dyn FallbackProvider>,
}

impl ListingService {
    /// `source` is `None` in offline mode, where the fallback provider's
    /// dataset is served instead.
    pub fn new(
        source: Option<Arc<dyn JobSource>>,
        counts: CountCache,
        fallback: Arc<dyn FallbackProvider>,
    ) -> Self {
        Self {
            source,
            counts,
            fallback,
        }
    }

    pub fn is_live(&self) -> bool {
        self.source.is_some()
    }

    pub async fn list(&self, request: &ListingRequest) -> ListingPage {
        let page = match &self.source {
            None => self.offline_page(request),
            Some(source) => match self.live_page(source.as_ref(), request).await {
                Ok(page) => page,
                Err(e) => {
                    error!("Upstream request failed, serving fallback content: {:#}", e);
                    self.failure_page()
                }
            },
        };

        info!(
            "Sending {} jobs ({:?}, total {}, has_more {})",
            page.jobs.len(),
            page.origin,
            page.total_count,
            page.has_more
        );
        page
    }

    async fn live_page(&self, source: &dyn JobSource, request: &ListingRequest) -> Result<ListingPage> {
        let criteria = &request.criteria;
        let raw = source
            .fetch_page(&criteria.query, &criteria.location, request.page)
            .await?;
        let raw_len = raw.len();

        let jobs = apply_filters(dedup_jobs(normalize_jobs(raw)), criteria);

        let total = self
            .counts
            .count_or_aggregate(source, criteria, request.aggregate_pages)
            .await;

        Ok(ListingPage {
            has_more: has_more(total, raw_len, request.page, UPSTREAM_PAGE_SIZE),
            total_count: total.unwrap_or(jobs.len()),
            jobs,
            origin: ListingOrigin::Live,
        })
    }

    fn offline_page(&self, request: &ListingRequest) -> ListingPage {
        let matching = apply_filters(
            dedup_jobs(self.fallback.offline_jobs()),
            &request.criteria,
        );
        let total = matching.len();
        let page_size = request.page_size.max(1) as usize;
        let start = (request.page.max(1) as usize - 1).saturating_mul(page_size);

        let jobs = matching.into_iter().skip(start).take(page_size).collect();

        ListingPage {
            jobs,
            total_count: total,
            has_more: has_more(Some(total), 0, request.page, page_size),
            origin: ListingOrigin::Offline,
        }
    }

    fn failure_page(&self) -> ListingPage {
        let jobs = self.fallback.failure_jobs();
        ListingPage {
            total_count: jobs.len(),
            jobs,
            has_more: false,
            origin: ListingOrigin::Fallback,
        }
    }
}
