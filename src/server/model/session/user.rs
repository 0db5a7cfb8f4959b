//! Authenticated user session data.
//!
//! The user ID and role are stored together under a single key so a reader can never
//! observe one without the other. A session without this key is anonymous.

use entity::role::{UserRole, UserType};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::{error::Error, model::db::UserModel};

/// Session key for the authenticated user.
pub const SESSION_USER_KEY: &str = "portal:user";

/// Identity and role of the user logged in on a session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionUser {
    /// ID of the logged in user
    pub user_id: i32,
    /// Role of the logged in user at login time, `None` when the user has no role
    pub user_type: Option<UserRole>,
}

impl SessionUser {
    /// Creates a new session user with a known role.
    pub fn new(user_id: i32, user_type: Option<UserType>) -> Self {
        Self {
            user_id,
            user_type: user_type.map(UserRole::from),
        }
    }

    /// Creates the session user for a user record, keeping the stored role as is.
    pub fn from_user(user: &UserModel) -> Self {
        Self {
            user_id: user.id,
            user_type: user.role(),
        }
    }

    /// The user's known role, `None` when unset or unrecognized.
    pub fn role(&self) -> Option<UserType> {
        self.user_type.as_ref().and_then(UserRole::user_type)
    }

    /// Inserts the user into the session, marking the session as authenticated.
    ///
    /// # Arguments
    /// - `session` - User's session
    /// - `user` - Identity and role to store
    ///
    /// # Returns
    /// - `Ok(())` - User stored in session
    /// - `Err(Error::SessionError)` - Session storage failed
    pub async fn insert(session: &Session, user: SessionUser) -> Result<(), Error> {
        session.insert(SESSION_USER_KEY, user).await?;

        Ok(())
    }

    /// Gets the user from the session.
    ///
    /// # Returns
    /// - `Ok(Some(SessionUser))` - Session is authenticated
    /// - `Ok(None)` - Session is anonymous
    /// - `Err(Error::SessionError)` - Session retrieval or deserialization failed
    pub async fn get(session: &Session) -> Result<Option<SessionUser>, Error> {
        Ok(session.get::<SessionUser>(SESSION_USER_KEY).await?)
    }
}
