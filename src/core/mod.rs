// src/core/mod.rs
//! Job listing core: upstream access, normalization, filtering and counts

pub mod count_cache;
pub mod fallback;
pub mod filters;
pub mod listing;
pub mod normalizer;
pub mod upstream_client;

#[cfg(test)]
pub(crate) mod testing;

pub use count_cache::CountCache;
pub use fallback::{FallbackProvider, SampleJobs};
pub use filters::FilterCriteria;
pub use listing::{ListingOrigin, ListingPage, ListingRequest, ListingService};
pub use upstream_client::{JSearchClient, JobSource};
