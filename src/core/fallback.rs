// src/core/fallback.rs
//! Substitute content served when the live job source is unavailable

use crate::types::Job;

/// Supplies jobs when the primary source cannot.
pub trait FallbackProvider: Send + Sync {
    /// Dataset used when no upstream credential is configured.
    fn offline_jobs(&self) -> Vec<Job>;

    /// Content served when the live upstream request fails.
    fn failure_jobs(&self) -> Vec<Job>;
}

/// Built-in sample content.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleJobs;

impl FallbackProvider for SampleJobs {
    fn offline_jobs(&self) -> Vec<Job> {
        vec![
            Job {
                title: "Senior Software Engineer".to_string(),
                company: "Acme Corp".to_string(),
                location: "Bengaluru".to_string(),
                description: "Design and ship backend services for Acme's hiring platform."
                    .to_string(),
                apply_link: Some(
                    "https://careers.acme.example/jobs/senior-software-engineer".to_string(),
                ),
                salary_min: Some(120_000.0),
                salary_max: Some(180_000.0),
                salary_currency: Some("USD".to_string()),
                employment_type: Some("FULLTIME".to_string()),
                skills: vec![
                    "Rust".to_string(),
                    "PostgreSQL".to_string(),
                    "Kubernetes".to_string(),
                ],
            },
            Job {
                title: "Frontend Developer".to_string(),
                company: "Globex".to_string(),
                location: "Lagos".to_string(),
                description: "Build the Globex customer dashboard in React.".to_string(),
                apply_link: Some("https://globex.example/careers/frontend-developer".to_string()),
                salary_min: Some(6_000_000.0),
                salary_max: Some(9_000_000.0),
                salary_currency: Some("NGN".to_string()),
                employment_type: Some("CONTRACTOR".to_string()),
                skills: vec!["React".to_string(), "TypeScript".to_string()],
            },
        ]
    }

    fn failure_jobs(&self) -> Vec<Job> {
        vec![Job {
            title: "Software Engineer".to_string(),
            company: "Sample Company".to_string(),
            location: "Remote".to_string(),
            description: "Live listings are temporarily unavailable. This is a sample job."
                .to_string(),
            apply_link: None,
            salary_min: None,
            salary_max: None,
            salary_currency: None,
            employment_type: Some("FULLTIME".to_string()),
            skills: vec![],
        }]
    }
}
