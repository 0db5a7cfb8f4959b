//! Data access layer repositories.
//!
//! Repositories are the credential store of the portal: they are the sole writers of user
//! and job posting records and provide a narrow abstraction over SeaORM.

pub mod job_posting;
pub mod user;
