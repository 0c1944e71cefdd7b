// src/core/testing.rs
//! In-memory `JobSource` used by unit tests

use anyhow::Result;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::upstream_client::JobSource;
use crate::types::RawJob;

pub struct FakeSource {
    pages: Vec<Vec<RawJob>>,
    failing: HashSet<u32>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(pages: Vec<Vec<RawJob>>) -> Self {
        Self {
            pages,
            failing: HashSet::new(),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_on(mut self, page: u32) -> Self {
        self.failing.insert(page);
        self
    }

    /// Sleep before answering each fetch
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[rocket::async_trait]
impl JobSource for FakeSource {
    async fn fetch_page(&self, _query: &str, _location: &str, page: u32) -> Result<Vec<RawJob>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(&page) {
            anyhow::bail!("upstream unavailable for page {}", page);
        }
        Ok(self
            .pages
            .get(page.saturating_sub(1) as usize)
            .cloned()
            .unwrap_or_default())
    }
}

/// `count` distinct records for `company`, titled `{company} #{n}`.
pub fn raw_page(company: &str, count: usize) -> Vec<RawJob> {
    (0..count)
        .map(|n| RawJob {
            job_title: Some(format!("{} #{}", company, n)),
            employer_name: Some(company.to_string()),
            job_city: Some("Chennai".to_string()),
            job_apply_link: Some(format!("https://jobs.test/{}/{}", company, n)),
            job_employment_type: Some("FULLTIME".to_string()),
            ..Default::default()
        })
        .collect()
}
