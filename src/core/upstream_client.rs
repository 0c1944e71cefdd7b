// src/core/upstream_client.rs
//! HTTP client for the RapidAPI jsearch service

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{error, info};

use crate::types::{RawJob, SearchResponse};

const SEARCH_ENDPOINT: &str = "/search";

/// Number of records the upstream returns for a full page.
pub const UPSTREAM_PAGE_SIZE: usize = 10;

/// A source of raw job records, one upstream page at a time.
#[rocket::async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_page(&self, query: &str, location: &str, page: u32) -> Result<Vec<RawJob>>;
}

pub struct JSearchClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_host: String,
}

impl JSearchClient {
    pub fn new(base_url: String, api_key: String, api_host: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            api_host,
        })
    }
}

#[rocket::async_trait]
impl JobSource for JSearchClient {
    async fn fetch_page(&self, query: &str, location: &str, page: u32) -> Result<Vec<RawJob>> {
        let url = format!("{}{}", self.base_url, SEARCH_ENDPOINT);
        let search = format!("{} in {}", query, location);
        let page_param = page.to_string();

        info!("Fetching upstream page {} for '{}'", page, search);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", search.as_str()),
                ("page", page_param.as_str()),
                ("num_pages", "1"),
            ])
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .send()
            .await
            .context("Failed to send request to job search API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Job search API error {}: {}", status, error_text);
            anyhow::bail!("Job search API returned error {}: {}", status, error_text);
        }

        let search_response: SearchResponse = response
            .json()
            .await
            .context("Failed to parse job search API response")?;

        Ok(search_response.into_jobs())
    }
}
