//! Authorization gate as used by handlers.

use entity::role::UserType;
use tower_sessions::Session;

use crate::server::{
    error::Error,
    model::session::user::SessionUser,
    service::auth::gate::{require_authenticated, require_role},
};

/// Runs the authorization gate for a role-restricted route.
///
/// Authentication is always checked before role membership.
///
/// # Arguments
/// - `session` - The caller's session
/// - `allowed` - Roles permitted on the route
///
/// # Returns
/// - `Ok(SessionUser)` - Caller is logged in with an allowed role
/// - `Err(Error::AuthError(AuthError::Unauthenticated))` - No user in session
/// - `Err(Error::AuthError(AuthError::Unauthorized))` - Logged in with another role
/// - `Err(Error::SessionError)` - Session could not be read
pub async fn authorize(session: &Session, allowed: &[UserType]) -> Result<SessionUser, Error> {
    let user = require_authenticated(SessionUser::get(session).await?)?;
    require_role(&user, allowed)?;

    Ok(user)
}
