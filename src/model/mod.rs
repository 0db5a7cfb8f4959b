//! Request and response types shared by the HTTP surface.

pub mod api;
pub mod dashboard;
pub mod job_posting;
pub mod user;
