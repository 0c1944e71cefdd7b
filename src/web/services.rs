// src/web/services.rs
use crate::config::ConfigManager;
use crate::core::{CountCache, JSearchClient, JobSource, ListingService, SampleJobs};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Wire the listing service from configuration: a live jsearch client when an
/// API key is present, the offline sample dataset otherwise.
pub fn build_listing_service(config: &ConfigManager) -> Result<ListingService> {
    let upstream = &config.upstream;

    let source: Option<Arc<dyn JobSource>> = match &upstream.api_key {
        Some(api_key) => {
            let client = JSearchClient::new(
                upstream.base_url.clone(),
                api_key.clone(),
                upstream.api_host.clone(),
                upstream.timeout_secs,
            )
            .context("Failed to initialize job search client")?;
            info!("Serving live listings from {}", upstream.base_url);
            Some(Arc::new(client))
        }
        None => {
            warn!("RAPIDAPI_KEY not set, serving offline sample jobs");
            None
        }
    };

    let counts = CountCache::new(config.cache.ttl, config.cache.capacity);

    Ok(ListingService::new(source, counts, Arc::new(SampleJobs)))
}
