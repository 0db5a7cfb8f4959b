//! View models returned by the page routes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{job_posting::JobPostingDto, user::UserDto};

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HomeDto {
    pub logged_in: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginPageDto {
    /// Set when the visitor was sent to the login page from a protected route
    pub redirect_to_login: bool,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ResetPageDto {
    /// Confirmation shown after a successful reset
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StudentDashboardDto {
    pub user: UserDto,
    pub job_postings: Vec<JobPostingDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TnpDashboardDto {
    pub user: UserDto,
    /// One-shot message left by the previous request, e.g. after posting a job
    pub success_message: Option<String>,
}

/// Dashboard for roles without dashboard-specific data (recruiter, department), also used
/// to prefill the profile form
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub user: UserDto,
}
