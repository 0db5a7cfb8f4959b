//! HTTP controller endpoints for the placement portal.
//!
//! This module contains Axum handlers for authentication, dashboards, profile updates and
//! job postings. Each role-restricted handler runs the authorization gate before reading
//! its request body or touching the database.

pub mod auth;
pub mod dashboard;
pub mod job_posting;
pub mod user;
pub mod util;
