//! Job posting persistence.

use chrono::Utc;
use entity::job_posting::Skills;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

/// A job posting that has not been persisted yet.
#[derive(Debug, Clone)]
pub struct NewJobPosting {
    /// Hiring company
    pub company_name: String,
    /// Job profile title
    pub profile: String,
    /// Required skills, already split and trimmed
    pub skills_required: Vec<String>,
    /// Free text eligibility criteria
    pub eligibility: String,
    /// Free text job description
    pub description: String,
    /// Where to apply
    pub apply_link: String,
}

/// Repository for storing and listing job postings.
pub struct JobPostingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> JobPostingRepository<'a, C> {
    /// Creates a new instance of [`JobPostingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Saves a new job posting
    pub async fn save(
        &self,
        posting: NewJobPosting,
    ) -> Result<entity::job_posting::Model, DbErr> {
        let posting = entity::job_posting::ActiveModel {
            company_name: ActiveValue::Set(posting.company_name),
            profile: ActiveValue::Set(posting.profile),
            skills_required: ActiveValue::Set(Skills(posting.skills_required)),
            eligibility: ActiveValue::Set(posting.eligibility),
            description: ActiveValue::Set(posting.description),
            apply_link: ActiveValue::Set(posting.apply_link),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        posting.insert(self.db).await
    }

    /// Gets all job postings in submission order
    pub async fn get_all(&self) -> Result<Vec<entity::job_posting::Model>, DbErr> {
        entity::prelude::JobPosting::find()
            .order_by_asc(entity::job_posting::Column::Id)
            .all(self.db)
            .await
    }
}
