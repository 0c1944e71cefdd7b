// src/core/count_cache.rs
//! Aggregate result counts across several upstream pages, cached per filter
//! combination for a fixed time-to-live.

use moka::future::Cache;
use std::time::Duration;
use tracing::{info, warn};

use super::filters::{apply_filters, FilterCriteria};
use super::normalizer::normalize_jobs;
use super::upstream_client::{JobSource, UPSTREAM_PAGE_SIZE};
use crate::types::dedup_jobs;

pub const DEFAULT_AGGREGATE_PAGES: u32 = 3;
pub const MAX_AGGREGATE_PAGES: u32 = 5;
pub const DEFAULT_COUNT_TTL: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_COUNT_CAPACITY: u64 = 1_000;

/// Cache fingerprint of a filter combination. Page and page size are not part
/// of it: every page of one search shares the same total.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountKey {
    query: String,
    location: String,
    company: String,
    employment_type: String,
    // f64 bit patterns, so the key stays `Eq + Hash`
    salary_min: Option<u64>,
    salary_max: Option<u64>,
}

impl From<&FilterCriteria> for CountKey {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            query: criteria.query.clone(),
            location: criteria.location.clone(),
            company: criteria.company.trim().to_lowercase(),
            employment_type: criteria.employment_type.trim().to_lowercase(),
            salary_min: criteria.salary_min.map(f64::to_bits),
            salary_max: criteria.salary_max.map(f64::to_bits),
        }
    }
}

/// Clamp a requested page budget into `1..=MAX_AGGREGATE_PAGES`.
pub fn clamp_aggregate_pages(requested: Option<i64>) -> u32 {
    match requested {
        Some(pages) => pages.clamp(1, MAX_AGGREGATE_PAGES as i64) as u32,
        None => DEFAULT_AGGREGATE_PAGES,
    }
}

/// Fetch up to `max_pages` upstream pages and count the jobs passing `criteria`.
///
/// Stops at the first short page or the first failed page. Returns `None` only
/// when not a single page could be fetched.
pub async fn aggregate_count(
    source: &dyn JobSource,
    criteria: &FilterCriteria,
    max_pages: u32,
) -> Option<usize> {
    let mut gathered = Vec::new();
    let mut fetched_pages = 0;

    for page in 1..=max_pages {
        match source
            .fetch_page(&criteria.query, &criteria.location, page)
            .await
        {
            Ok(raw) => {
                fetched_pages += 1;
                let exhausted = raw.len() < UPSTREAM_PAGE_SIZE;
                gathered.extend(normalize_jobs(raw));
                if exhausted {
                    break;
                }
            }
            Err(e) => {
                warn!(
                    "Aggregation stopped at page {} for '{}': {:#}",
                    page, criteria.query, e
                );
                break;
            }
        }
    }

    if fetched_pages == 0 {
        return None;
    }

    let count = apply_filters(dedup_jobs(gathered), criteria).len();
    info!(
        "Aggregated {} matching jobs over {} page(s) for '{}'",
        count, fetched_pages, criteria.query
    );
    Some(count)
}

/// Bounded TTL cache of aggregate counts.
///
/// Concurrent misses on the same key wait on a single aggregation.
pub struct CountCache {
    counts: Cache<CountKey, usize>,
}

impl CountCache {
    pub fn new(ttl: Duration, capacity: u64) -> Self {
        let counts = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(ttl)
            .build();

        Self { counts }
    }

    #[cfg(test)]
    pub async fn cached(&self, criteria: &FilterCriteria) -> Option<usize> {
        self.counts.get(&CountKey::from(criteria)).await
    }

    /// Cached count for `criteria`, aggregating from `source` on a miss or
    /// after expiry. A failed aggregation is not cached.
    pub async fn count_or_aggregate(
        &self,
        source: &dyn JobSource,
        criteria: &FilterCriteria,
        max_pages: u32,
    ) -> Option<usize> {
        self.counts
            .optionally_get_with(
                CountKey::from(criteria),
                aggregate_count(source, criteria, max_pages),
            )
            .await
    }
}

impl Default for CountCache {
    fn default() -> Self {
        Self::new(DEFAULT_COUNT_TTL, DEFAULT_COUNT_CAPACITY)
    }
}
