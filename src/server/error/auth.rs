//! Authentication and authorization failures.
//!
//! "Not logged in" and "logged in with the wrong role" are deliberately separate variants
//! with separate responses: the first redirects to the login page, the second answers 403
//! and names the role the caller is logged in with.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use entity::role::UserRole;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Path unauthenticated callers are redirected to.
pub const LOGIN_PATH: &str = "/login";

/// Authentication, authorization and credential verification errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is present in the session.
    #[error("User ID is not present in session")]
    Unauthenticated,
    /// The session user's role is not in the route's allowed set.
    #[error("User logged in as {} is not allowed to access this route", role_label(.0))]
    Unauthorized(Option<UserRole>),
    /// No user is registered with the submitted email.
    #[error("No user registered with the submitted email")]
    UserNotFound,
    /// The submitted password does not match the stored hash.
    #[error("Submitted password does not match stored credentials")]
    CredentialMismatch,
    /// The current password submitted with a password reset does not match.
    #[error("Submitted old password does not match stored credentials")]
    OldPasswordMismatch,
    /// The session references a user that no longer exists.
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
}

/// Human readable role name used in forbidden responses, `unset` for users without a role.
pub fn role_label(role: &Option<UserRole>) -> &str {
    role.as_ref().map_or("unset", UserRole::as_str)
}

impl AuthError {
    fn error_response(status: StatusCode, message: String) -> Response {
        (status, Json(ErrorDto { error: message })).into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            Self::Unauthenticated => {
                tracing::debug!("{}", self);

                // 303 so a rejected POST is followed up with a GET of the login page
                Redirect::to(LOGIN_PATH).into_response()
            }
            Self::Unauthorized(role) => {
                tracing::debug!(role = role_label(role), "{}", self);

                Self::error_response(
                    StatusCode::FORBIDDEN,
                    format!(
                        "You can't access this module because you're logged in as a {}",
                        role_label(role)
                    ),
                )
            }
            Self::UserNotFound => {
                tracing::debug!("{}", self);

                Self::error_response(StatusCode::NOT_FOUND, "Email not found".to_string())
            }
            Self::CredentialMismatch => {
                tracing::debug!("{}", self);

                Self::error_response(StatusCode::UNAUTHORIZED, "Incorrect password".to_string())
            }
            Self::OldPasswordMismatch => {
                tracing::debug!("{}", self);

                Self::error_response(
                    StatusCode::UNAUTHORIZED,
                    "Incorrect old password".to_string(),
                )
            }
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::error_response(StatusCode::NOT_FOUND, "User not found".to_string())
            }
        }
    }
}
