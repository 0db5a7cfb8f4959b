//! Argon2 password hashing.
//!
//! Hashes are stored as PHC strings which carry their own salt and parameters, so
//! verification needs nothing but the stored string.

use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::Error;

/// Hashes a password with a freshly generated random salt.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash
/// - `Err(Error::PasswordHashError)` - Salt encoding or hashing failed
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
        .map_err(|e| Error::PasswordHashError(e.to_string()))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::PasswordHashError(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verifies a candidate password against a stored PHC hash.
///
/// The comparison of the derived and stored hash is constant-time.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(Error::PasswordHashError)` - Stored hash is malformed or uses unsupported parameters
pub fn verify_password(password: &str, hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(hash).map_err(|e| Error::PasswordHashError(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::PasswordHashError(e.to_string())),
    }
}
