//! Service layer for business logic.
//!
//! Services implement the portal's rules on top of the repositories: credential
//! verification and password reset, the authorization gate and role dispatch, profile
//! updates and job posting submission.

pub mod auth;
pub mod job_posting;
pub mod user;
