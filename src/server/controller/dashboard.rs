//! Home page and role-specific dashboards.

use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        dashboard::{DashboardDto, HomeDto, StudentDashboardDto, TnpDashboardDto},
    },
    server::{
        controller::util::{gate::authorize, get_user::get_user_from_session},
        error::Error,
        model::{
            app::AppState,
            session::{flash::SessionFlash, user::SessionUser},
        },
        service::{
            auth::gate::{
                dispatch, Destination, DEPARTMENT_ROLES, RECRUITER_ROLES, STUDENT_ROLES, TNP_ROLES,
            },
            job_posting::JobPostingService,
        },
    },
};

/// OpenAPI tag for the home page and dashboards.
pub static DASHBOARD_TAG: &str = "dashboard";

/// Home page
///
/// Logged in users with a role are sent to their dashboard using the same dispatch table as
/// login. Everyone else gets the home page.
#[utoipa::path(
    get,
    path = "/",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Home page view model", body = HomeDto),
        (status = 307, description = "Logged in with a role, redirect to the role's dashboard"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn home(session: Session) -> Result<Response, Error> {
    let Some(user) = SessionUser::get(&session).await? else {
        return Ok(Json(HomeDto { logged_in: false }).into_response());
    };

    match dispatch(user.role()) {
        Destination::Home => Ok(Json(HomeDto { logged_in: true }).into_response()),
        destination => Ok(Redirect::temporary(destination.path()).into_response()),
    }
}

/// Student dashboard with all job postings
#[utoipa::path(
    get,
    path = "/student",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Student dashboard", body = StudentDashboardDto),
        (status = 303, description = "Not logged in, redirect to login"),
        (status = 403, description = "Logged in with another role", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Error fetching data", body = ErrorDto)
    ),
)]
pub async fn student(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let session_user = authorize(&session, STUDENT_ROLES).await?;

    let user = get_user_from_session(&state, &session, &session_user).await?;
    let job_postings = JobPostingService::new(&state.db).get_all().await?;

    Ok(Json(StudentDashboardDto { user, job_postings }))
}

/// Training and placement dashboard
///
/// Shows the success message left by the previous request once, then clears it.
#[utoipa::path(
    get,
    path = "/TnP",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Training and placement dashboard", body = TnpDashboardDto),
        (status = 303, description = "Not logged in, redirect to login"),
        (status = 403, description = "Logged in with another role", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn tnp(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let session_user = authorize(&session, TNP_ROLES).await?;

    let user = get_user_from_session(&state, &session, &session_user).await?;
    let success_message = SessionFlash::take(&session).await;

    Ok(Json(TnpDashboardDto {
        user,
        success_message,
    }))
}

/// Recruiter dashboard
#[utoipa::path(
    get,
    path = "/recruiter",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Recruiter dashboard", body = DashboardDto),
        (status = 303, description = "Not logged in, redirect to login"),
        (status = 403, description = "Logged in with another role", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn recruiter(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let session_user = authorize(&session, RECRUITER_ROLES).await?;

    let user = get_user_from_session(&state, &session, &session_user).await?;

    Ok(Json(DashboardDto { user }))
}

/// Department dashboard for faculty and heads of department
#[utoipa::path(
    get,
    path = "/department",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Department dashboard", body = DashboardDto),
        (status = 303, description = "Not logged in, redirect to login"),
        (status = 403, description = "Logged in with another role", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn department(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let session_user = authorize(&session, DEPARTMENT_ROLES).await?;

    let user = get_user_from_session(&state, &session, &session_user).await?;

    Ok(Json(DashboardDto { user }))
}
