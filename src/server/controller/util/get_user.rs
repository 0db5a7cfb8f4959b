//! Loading the logged in user's record.

use tower_sessions::Session;

use crate::{
    model::user::UserDto,
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUser},
        service::user::UserService,
    },
};

/// Retrieves the logged in user's record from the database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
/// - `session_user`: User that passed the authorization gate
///
/// # Returns
/// - `Ok(UserDto)`: User found
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not
///   found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(
    state: &AppState,
    session: &Session,
    session_user: &SessionUser,
) -> Result<UserDto, Error> {
    let user_id = session_user.user_id;

    let Some(user) = UserService::new(&state.db).get_user(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user)
}
