//! Error types for the placement portal server.
//!
//! This module provides the error handling system with specialized error types for
//! authentication/authorization and configuration. All errors implement `IntoResponse` for
//! Axum HTTP responses and use `thiserror` for `Display` and `Error` implementations.

pub mod auth;
pub mod config;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::FormRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Main error type for the placement portal server.
///
/// Aggregates domain-specific error types and external library errors into a single type.
/// `#[from]` conversions allow `?` on any underlying error. The `IntoResponse` implementation
/// decides which failures are shown to the caller and which collapse into a generic 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication, authorization or credential verification error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Password could not be hashed or a stored hash could not be parsed.
    #[error("Password hashing failed: {0}")]
    PasswordHashError(String),
    /// Internal error indicating a bug in the portal's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Request body is not a valid urlencoded form.
    #[error(transparent)]
    FormRejection(#[from] FormRejection),
    /// Request is not a multipart request.
    #[error(transparent)]
    MultipartRejection(#[from] MultipartRejection),
    /// Malformed multipart request body.
    #[error(transparent)]
    MultipartError(#[from] MultipartError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Filesystem or socket error.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 303 See Other - No user in session, redirect to `/login`
/// - 400 / 415 / 422 - Malformed form or multipart body
/// - 401 Unauthorized - Password does not match
/// - 403 Forbidden - Logged in with a role that may not access the route
/// - 404 Not Found - Email not registered, or session user no longer exists
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::FormRejection(rejection) => {
                tracing::debug!("Rejected form body: {}", rejection);

                rejection.into_response()
            }
            Self::MultipartRejection(rejection) => {
                tracing::debug!("Rejected multipart request: {}", rejection);

                rejection.into_response()
            }
            Self::MultipartError(err) => {
                tracing::debug!("Rejected multipart body: {}", err);

                (
                    err.status(),
                    Json(ErrorDto {
                        error: err.body_text(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// so implementation details are not leaked.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
