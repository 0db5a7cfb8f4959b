use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JobPostingDto {
    pub id: i32,
    pub company_name: String,
    pub profile: String,
    pub skills_required: Vec<String>,
    pub eligibility: String,
    pub description: String,
    pub apply_link: String,
    pub created_at: NaiveDateTime,
}

/// Job posting form submitted to `POST /job_postings`
///
/// `skills_required` is a comma-separated list, e.g. `"rust, sql, git"`.
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobPostingForm {
    pub company_name: String,
    pub profile: String,
    pub skills_required: String,
    pub eligibility: String,
    pub description: String,
    pub apply_link: String,
}
