// src/types/job.rs
//! Internal job shape served to the frontend

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub apply_link: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
    pub salary_currency: Option<String>,
    pub employment_type: Option<String>,
    pub skills: Vec<String>,
}

/// Identity of a job as seen by the frontend. Two jobs with the same key are
/// the same job even when description or salary differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobKey {
    pub title: String,
    pub company: String,
    pub location: String,
    pub apply_link: Option<String>,
}

impl Job {
    pub fn key(&self) -> JobKey {
        JobKey {
            title: self.title.clone(),
            company: self.company.clone(),
            location: self.location.clone(),
            apply_link: self.apply_link.clone(),
        }
    }

    /// True when neither salary bound is known
    pub fn salary_unknown(&self) -> bool {
        self.salary_min.is_none() && self.salary_max.is_none()
    }
}

/// Drop later occurrences of an already seen `JobKey`, keeping order.
pub fn dedup_jobs(jobs: Vec<Job>) -> Vec<Job> {
    let mut seen = HashSet::with_capacity(jobs.len());
    jobs.into_iter().filter(|job| seen.insert(job.key())).collect()
}
