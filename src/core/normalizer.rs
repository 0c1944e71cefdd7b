// src/core/normalizer.rs
//! Maps upstream jsearch records into the internal `Job` shape

use crate::types::{Job, RawJob};

/// Normalize a single upstream record.
///
/// Salary fields stay `None` when absent: zero is a real salary, unknown is not.
pub fn normalize_job(raw: RawJob) -> Job {
    let location = non_empty(raw.job_city)
        .or_else(|| non_empty(raw.job_country))
        .unwrap_or_default();

    let skills = raw
        .job_required_skills
        .or_else(|| raw.job_highlights.and_then(|h| h.qualifications))
        .unwrap_or_default();

    Job {
        title: raw.job_title.unwrap_or_default(),
        company: raw.employer_name.unwrap_or_default(),
        location,
        description: raw.job_description.unwrap_or_default(),
        apply_link: non_empty(raw.job_apply_link),
        salary_min: raw.job_min_salary,
        salary_max: raw.job_max_salary,
        salary_currency: non_empty(raw.job_salary_currency),
        employment_type: non_empty(raw.job_employment_type),
        skills,
    }
}

pub fn normalize_jobs(raw: Vec<RawJob>) -> Vec<Job> {
    raw.into_iter().map(normalize_job).collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
