//! Student profile endpoints.

use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, Multipart, State},
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::DashboardDto},
    server::{
        controller::util::{gate::authorize, get_user::get_user_from_session},
        error::{auth::AuthError, Error},
        model::app::AppState,
        service::{
            auth::gate::{Destination, STUDENT_ROLES},
            user::{ProfileUpdate, UserService},
        },
        util::upload::{discard_profile_picture, save_profile_picture},
    },
};

/// OpenAPI tag for profile endpoints.
pub static USER_TAG: &str = "user";

/// Multipart field carrying the display name.
const NAME_FIELD: &str = "name";
/// Multipart field carrying the profile picture file.
const PROFILE_PICTURE_FIELD: &str = "profilePicture";

/// Profile form prefilled with the current profile
#[utoipa::path(
    get,
    path = "/updateProfile",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current profile", body = DashboardDto),
        (status = 303, description = "Not logged in, redirect to login"),
        (status = 403, description = "Logged in with another role", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let session_user = authorize(&session, STUDENT_ROLES).await?;

    let user = get_user_from_session(&state, &session, &session_user).await?;

    Ok(Json(DashboardDto { user }))
}

/// Updates the student's name and/or profile picture
///
/// Accepts `multipart/form-data` with an optional `name` text field and an optional
/// `profilePicture` file field. The body is only read after the caller passed the
/// authorization gate.
///
/// # Responses
/// - 303 (See Other): Profile updated, redirect to the student dashboard
/// - 303 (See Other): Not logged in, redirect to login
/// - 400 (Bad Request): Malformed multipart body
/// - 403 (Forbidden): Logged in with another role
/// - 500 (Internal Server Error): Database or file system failure
#[utoipa::path(
    post,
    path = "/update_profile",
    tag = USER_TAG,
    responses(
        (status = 303, description = "Profile updated, redirect to the student dashboard. Not logged in, redirect to login"),
        (status = 400, description = "Malformed multipart body", body = ErrorDto),
        (status = 403, description = "Logged in with another role", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, Error> {
    let session_user = authorize(&session, STUDENT_ROLES).await?;
    let user_id = session_user.user_id;

    let mut multipart = multipart?;
    let mut update = ProfileUpdate::default();
    let mut picture: Option<(Option<String>, Bytes)> = None;

    // Nothing touches the disk until the whole body has been read
    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(str::to_string);

        match field_name.as_deref() {
            Some(NAME_FIELD) => update.name = Some(field.text().await?),
            Some(PROFILE_PICTURE_FIELD) => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await?;

                // Browsers submit an empty file part when no file was chosen
                if !bytes.is_empty() {
                    picture = Some((file_name, bytes));
                }
            }
            _ => {}
        }
    }

    if let Some((file_name, bytes)) = picture {
        let path =
            save_profile_picture(&state.upload_dir, user_id, file_name.as_deref(), &bytes).await?;
        update.profile_picture = Some(path);
    }

    let stored_picture = update.profile_picture.clone();
    let result = UserService::new(&state.db)
        .update_profile(user_id, update)
        .await;

    if !matches!(result, Ok(Some(_))) {
        if let Some(path) = stored_picture.as_deref() {
            discard_profile_picture(&state.upload_dir, path).await;
        }
    }

    if result?.is_none() {
        session.clear().await;

        return Err(AuthError::UserNotInDatabase(user_id).into());
    }

    Ok(Redirect::to(Destination::StudentDashboard.path()))
}
