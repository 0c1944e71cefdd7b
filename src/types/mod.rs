pub mod job;
pub mod upstream;

pub use job::{dedup_jobs, Job, JobKey};
pub use upstream::{JobHighlights, RawJob, SearchResponse};
