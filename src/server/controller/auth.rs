//! Login, logout and password reset endpoints.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        dashboard::{LoginPageDto, ResetPageDto},
        user::{LoginForm, ResetPasswordForm},
    },
    server::{
        error::Error,
        model::{app::AppState, session::user::SessionUser},
        service::auth::{gate::dispatch, login::AuthService},
    },
};

/// OpenAPI tag for authentication endpoints.
pub static AUTH_TAG: &str = "auth";

/// Query parameters of the login page.
#[derive(Deserialize, IntoParams)]
pub struct LoginPageParams {
    /// Set by protected routes redirecting an anonymous visitor
    pub redirect: Option<bool>,
}

/// Login page
#[utoipa::path(
    get,
    path = "/login",
    tag = AUTH_TAG,
    params(LoginPageParams),
    responses(
        (status = 200, description = "Login page view model", body = LoginPageDto),
    ),
)]
pub async fn login_page(Query(params): Query<LoginPageParams>) -> impl IntoResponse {
    Json(LoginPageDto {
        redirect_to_login: params.redirect.unwrap_or(false),
    })
}

/// Logs a user in with email and password
///
/// On success the session is given a fresh ID, the user's ID and role are stored in it and the
/// user is redirected to the dashboard for their role. On failure the session is left untouched.
///
/// # Responses
/// - 303 (See Other): Logged in, redirect to the role's dashboard (or home without a role)
/// - 401 (Unauthorized): Incorrect password
/// - 404 (Not Found): Email not registered
/// - 500 (Internal Server Error): Database or session store failure
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in, redirect to the dashboard for the user's role"),
        (status = 401, description = "Incorrect password", body = ErrorDto),
        (status = 404, description = "Email not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, Error> {
    let user = AuthService::new(&state.db)
        .verify_credentials(&form.email, &form.password)
        .await?;

    session.cycle_id().await?;
    let session_user = SessionUser::from_user(&user);
    let destination = dispatch(session_user.role());
    SessionUser::insert(&session, session_user).await?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Redirect::to(destination.path()))
}

/// Logs the user out by destroying their session
///
/// # Responses
/// - 307 (Temporary Redirect): Logged out (or was not logged in), redirect to home
/// - 500 (Internal Server Error): The session store failed to delete the session; the session
///   is left intact
#[utoipa::path(
    get,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to home"),
        (status = 500, description = "Error logging out", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Anonymous sessions have nothing stored to destroy
    if let Some(user) = SessionUser::get(&session).await? {
        session.delete().await?;
        session.flush().await?;

        tracing::info!(user_id = %user.user_id, "User logged out");
    }

    Ok(Redirect::temporary("/"))
}

/// Password reset page
#[utoipa::path(
    get,
    path = "/reset",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Password reset page view model", body = ResetPageDto),
    ),
)]
pub async fn reset_page() -> impl IntoResponse {
    Json(ResetPageDto { message: None })
}

/// Resets a password given the account's email and current password
///
/// # Responses
/// - 200 (OK): Password updated
/// - 401 (Unauthorized): Old password is incorrect
/// - 404 (Not Found): Email not registered
/// - 500 (Internal Server Error): Database or hashing failure
#[utoipa::path(
    post,
    path = "/reset",
    tag = AUTH_TAG,
    request_body(content = ResetPasswordForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Password updated", body = ResetPageDto),
        (status = 401, description = "Incorrect old password", body = ErrorDto),
        (status = 404, description = "Email not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Form(form): Form<ResetPasswordForm>,
) -> Result<impl IntoResponse, Error> {
    AuthService::new(&state.db)
        .reset_password(&form.email, &form.old_password, &form.new_password)
        .await?;

    Ok(Json(ResetPageDto {
        message: Some("Password updated successfully".to_string()),
    }))
}
