//! Authentication and authorization services.
//!
//! - [`gate`] - Pure authentication/role checks and role-based dispatch
//! - [`login`] - Credential verification and password reset against the credential store
//! - [`password`] - Argon2 password hashing and verification

pub mod gate;
pub mod login;
pub mod password;
