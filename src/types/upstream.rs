// src/types/upstream.rs
//! Response shapes of the jsearch API. Every field is optional because the
//! upstream omits or nulls them freely.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Option<Vec<RawJob>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawJob {
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub employer_name: Option<String>,
    #[serde(default)]
    pub job_city: Option<String>,
    #[serde(default)]
    pub job_country: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub job_apply_link: Option<String>,
    #[serde(default)]
    pub job_min_salary: Option<f64>,
    #[serde(default)]
    pub job_max_salary: Option<f64>,
    #[serde(default)]
    pub job_salary_currency: Option<String>,
    #[serde(default)]
    pub job_employment_type: Option<String>,
    #[serde(default)]
    pub job_required_skills: Option<Vec<String>>,
    #[serde(default)]
    pub job_highlights: Option<JobHighlights>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobHighlights {
    #[serde(rename = "Qualifications", default)]
    pub qualifications: Option<Vec<String>>,
}

impl SearchResponse {
    pub fn into_jobs(self) -> Vec<RawJob> {
        self.data.unwrap_or_default()
    }
}
