//! Job posting fixture utilities.

use chrono::Utc;
use entity::job_posting::Skills;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn job_posting(&self) -> JobPostingFixtures<'_> {
        JobPostingFixtures { setup: self }
    }
}

pub struct JobPostingFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> JobPostingFixtures<'a> {
    /// Insert a job posting for the provided company with standard test values
    pub async fn insert_mock_job_posting(
        &self,
        company_name: &str,
    ) -> Result<entity::job_posting::Model, TestError> {
        Ok(
            entity::prelude::JobPosting::insert(entity::job_posting::ActiveModel {
                company_name: ActiveValue::Set(company_name.to_string()),
                profile: ActiveValue::Set("Software Engineer".to_string()),
                skills_required: ActiveValue::Set(Skills(vec![
                    "rust".to_string(),
                    "sql".to_string(),
                ])),
                eligibility: ActiveValue::Set("B.Tech, 7.0 CGPA".to_string()),
                description: ActiveValue::Set("Build and operate services".to_string()),
                apply_link: ActiveValue::Set("https://example.com/apply".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
