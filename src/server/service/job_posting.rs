//! Job posting submission and listing.

use sea_orm::DatabaseConnection;

use crate::{
    model::job_posting::{JobPostingDto, JobPostingForm},
    server::{
        data::job_posting::{JobPostingRepository, NewJobPosting},
        error::Error,
        model::db::JobPostingModel,
    },
};

impl From<JobPostingModel> for JobPostingDto {
    fn from(posting: JobPostingModel) -> Self {
        Self {
            id: posting.id,
            company_name: posting.company_name,
            profile: posting.profile,
            skills_required: posting.skills_required.0,
            eligibility: posting.eligibility,
            description: posting.description,
            apply_link: posting.apply_link,
            created_at: posting.created_at,
        }
    }
}

/// Splits a comma-separated skill list, trimming whitespace and dropping empty entries.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// Service for submitting and listing job postings.
pub struct JobPostingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JobPostingService<'a> {
    /// Creates a new instance of [`JobPostingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a submitted job posting form.
    pub async fn create(&self, form: JobPostingForm) -> Result<JobPostingDto, Error> {
        let posting = JobPostingRepository::new(self.db)
            .save(NewJobPosting {
                company_name: form.company_name,
                profile: form.profile,
                skills_required: parse_skills(&form.skills_required),
                eligibility: form.eligibility,
                description: form.description,
                apply_link: form.apply_link,
            })
            .await?;

        tracing::info!(
            job_posting_id = %posting.id,
            company = %posting.company_name,
            "Job posting created"
        );

        Ok(posting.into())
    }

    /// Lists all job postings in submission order.
    pub async fn get_all(&self) -> Result<Vec<JobPostingDto>, Error> {
        let postings = JobPostingRepository::new(self.db).get_all().await?;

        Ok(postings.into_iter().map(JobPostingDto::from).collect())
    }
}
