// src/core/filters.rs
//! Company, employment-type and salary filters over normalized jobs

use crate::types::Job;

pub const DEFAULT_QUERY: &str = "Software Engineer";
pub const DEFAULT_LOCATION: &str = "India";

#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub query: String,
    pub location: String,
    pub company: String,
    pub employment_type: String,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: DEFAULT_QUERY.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            company: String::new(),
            employment_type: String::new(),
            salary_min: None,
            salary_max: None,
        }
    }
}

impl FilterCriteria {
    pub fn has_salary_filter(&self) -> bool {
        self.salary_min.is_some() || self.salary_max.is_some()
    }

    pub fn matches(&self, job: &Job) -> bool {
        self.matches_company(job) && self.matches_type(job) && self.matches_salary(job)
    }

    fn matches_company(&self, job: &Job) -> bool {
        let needle = self.company.trim();
        if needle.is_empty() {
            return true;
        }
        job.company
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    fn matches_type(&self, job: &Job) -> bool {
        let wanted = self.employment_type.trim();
        if wanted.is_empty() {
            return true;
        }
        job.employment_type
            .as_deref()
            .map_or(false, |t| t.trim().to_lowercase() == wanted.to_lowercase())
    }

    // Salaries are compared in whatever currency the job reports.
    fn matches_salary(&self, job: &Job) -> bool {
        if !self.has_salary_filter() {
            return true;
        }

        let (job_min, job_max) = match (job.salary_min, job.salary_max) {
            (Some(lo), Some(hi)) => (lo, hi),
            (Some(lo), None) => (lo, lo),
            (None, Some(hi)) => (hi, hi),
            (None, None) => return false,
        };

        if let Some(min) = self.salary_min {
            if job_max < min {
                return false;
            }
        }
        if let Some(max) = self.salary_max {
            if job_min > max {
                return false;
            }
        }
        true
    }
}

/// Stable, order-preserving filter.
pub fn apply_filters(jobs: Vec<Job>, criteria: &FilterCriteria) -> Vec<Job> {
    jobs.into_iter().filter(|job| criteria.matches(job)).collect()
}
