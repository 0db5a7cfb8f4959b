//! One-shot success message carried to the next page view.

use tower_sessions::Session;

use crate::server::error::Error;

/// Session key for the pending success message.
pub const SESSION_FLASH_KEY: &str = "portal:flash:success";

/// Success message shown once on the next dashboard load.
pub struct SessionFlash;

impl SessionFlash {
    /// Stores a success message to be shown on the next page view.
    pub async fn insert(session: &Session, message: &str) -> Result<(), Error> {
        session.insert(SESSION_FLASH_KEY, message).await?;

        Ok(())
    }

    /// Removes and returns the pending success message.
    ///
    /// Best-effort: a session store failure is logged and treated as no message.
    pub async fn take(session: &Session) -> Option<String> {
        match session.remove::<String>(SESSION_FLASH_KEY).await {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!("Failed to clear success message from session: {}", e);

                None
            }
        }
    }
}
