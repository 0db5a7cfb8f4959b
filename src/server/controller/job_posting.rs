//! Job posting submission endpoint.

use axum::{
    extract::{rejection::FormRejection, State},
    response::{IntoResponse, Redirect},
    Form,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, job_posting::JobPostingForm},
    server::{
        controller::util::gate::authorize,
        error::Error,
        model::{app::AppState, session::flash::SessionFlash},
        service::{
            auth::gate::{Destination, TNP_ROLES},
            job_posting::JobPostingService,
        },
    },
};

/// OpenAPI tag for job posting endpoints.
pub static JOB_POSTING_TAG: &str = "job_posting";

/// Message shown on the training and placement dashboard after a successful submission.
pub const JOB_POSTED_MESSAGE: &str = "Job posted successfully";

/// Submits a new job posting
///
/// # Responses
/// - 303 (See Other): Posting saved, redirect to the training and placement dashboard which
///   shows a one-time success message
/// - 303 (See Other): Not logged in, redirect to login
/// - 403 (Forbidden): Logged in with another role
/// - 422 (Unprocessable Entity): Form fields missing
/// - 500 (Internal Server Error): Database failure
#[utoipa::path(
    post,
    path = "/job_postings",
    tag = JOB_POSTING_TAG,
    request_body(content = JobPostingForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Posting saved, redirect to the training and placement dashboard. Not logged in, redirect to login"),
        (status = 403, description = "Logged in with another role", body = ErrorDto),
        (status = 422, description = "Form fields missing"),
        (status = 500, description = "Error adding job posting", body = ErrorDto)
    ),
)]
pub async fn create_job_posting(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<JobPostingForm>, FormRejection>,
) -> Result<impl IntoResponse, Error> {
    authorize(&session, TNP_ROLES).await?;

    let Form(form) = form?;

    JobPostingService::new(&state.db).create(form).await?;
    SessionFlash::insert(&session, JOB_POSTED_MESSAGE).await?;

    Ok(Redirect::to(Destination::TnpDashboard.path()))
}
