//! Credential verification and password reset.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::{UserRepository, UserUpdate},
    error::{auth::AuthError, Error},
    model::db::UserModel,
    service::auth::password::{hash_password, verify_password},
};

/// Service verifying user credentials against the credential store.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies an email and password pair.
    ///
    /// Looks up the user by exact email match and compares the candidate password against
    /// the stored hash. This is the only check performed before a session is authenticated,
    /// it never touches the session itself.
    ///
    /// # Arguments
    /// - `email` - Submitted email
    /// - `password` - Submitted plaintext password
    ///
    /// # Returns
    /// - `Ok(UserModel)` - Credentials are valid
    /// - `Err(Error::AuthError(AuthError::UserNotFound))` - No user with this email
    /// - `Err(Error::AuthError(AuthError::CredentialMismatch))` - Password does not match
    /// - `Err(Error)` - Database failure or malformed stored hash
    pub async fn verify_credentials(&self, email: &str, password: &str) -> Result<UserModel, Error> {
        let Some(user) = UserRepository::new(self.db).find_by_email(email).await? else {
            return Err(AuthError::UserNotFound.into());
        };

        let matches = run_blocking({
            let password = password.to_string();
            let hash = user.password_hash.clone();
            move || verify_password(&password, &hash)
        })
        .await?;

        if !matches {
            return Err(AuthError::CredentialMismatch.into());
        }

        Ok(user)
    }

    /// Replaces a user's password after verifying the old one.
    ///
    /// # Arguments
    /// - `email` - Email of the account
    /// - `old_password` - Current password
    /// - `new_password` - Password to set
    ///
    /// # Returns
    /// - `Ok(())` - Password updated, only `new_password` verifies from now on
    /// - `Err(Error::AuthError(AuthError::UserNotFound))` - No user with this email
    /// - `Err(Error::AuthError(AuthError::OldPasswordMismatch))` - Old password does not match
    /// - `Err(Error)` - Database or hashing failure
    pub async fn reset_password(
        &self,
        email: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), Error> {
        let user = self
            .verify_credentials(email, old_password)
            .await
            .map_err(|e| match e {
                Error::AuthError(AuthError::CredentialMismatch) => {
                    AuthError::OldPasswordMismatch.into()
                }
                e => e,
            })?;

        let password_hash = run_blocking({
            let new_password = new_password.to_string();
            move || hash_password(&new_password)
        })
        .await?;

        let updated = UserRepository::new(self.db)
            .update_fields(
                user.id,
                UserUpdate {
                    password_hash: Some(password_hash),
                    ..Default::default()
                },
            )
            .await?;

        if updated.is_none() {
            // Only possible if the user was deleted between lookup and update
            return Err(AuthError::UserNotFound.into());
        }

        tracing::info!(user_id = %user.id, "Password reset");

        Ok(())
    }
}

/// Runs CPU heavy password work off the async worker threads.
async fn run_blocking<T, F>(f: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, Error> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::InternalError(format!("Password task failed: {}", e)))?
}
