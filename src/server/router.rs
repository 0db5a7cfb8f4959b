//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all endpoints and Swagger UI documentation.
///
/// The session layer is not added here; callers wrap the returned router with the
/// `SessionManagerLayer` for their session store.
///
/// # Registered Endpoints
/// - `GET /` - Home page, or redirect to the logged in user's dashboard
/// - `GET /student` - Student dashboard (student)
/// - `GET /TnP` - Training and placement dashboard (tnp)
/// - `GET /recruiter` - Recruiter dashboard (recruiter)
/// - `GET /department` - Department dashboard (faculty, hod)
/// - `GET, POST /login` - Login page and login
/// - `GET /logout` - Logout
/// - `GET, POST /reset` - Password reset page and reset
/// - `GET /updateProfile` - Profile form (student)
/// - `POST /update_profile` - Profile update (student)
/// - `POST /job_postings` - Job posting submission (tnp)
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, upload_dir };
/// let router = routes().with_state(app_state).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Placement Portal", description = "Placement Portal API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Login, logout and password reset"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Home page and role dashboards"),
        (name = controller::user::USER_TAG, description = "Student profile"),
        (name = controller::job_posting::JOB_POSTING_TAG, description = "Job postings"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::dashboard::home))
        .routes(routes!(controller::dashboard::student))
        .routes(routes!(controller::dashboard::tnp))
        .routes(routes!(controller::dashboard::recruiter))
        .routes(routes!(controller::dashboard::department))
        .routes(routes!(
            controller::auth::login_page,
            controller::auth::login
        ))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::auth::reset_page,
            controller::auth::reset_password
        ))
        .routes(routes!(controller::user::update_profile_page))
        .routes(routes!(controller::user::update_profile))
        .routes(routes!(controller::job_posting::create_job_posting))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
