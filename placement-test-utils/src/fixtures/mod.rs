//! Database fixtures for tests.
//!
//! Fixture helpers are reached through accessor methods on [`TestContext`](crate::TestContext),
//! e.g. `test.user().insert_mock_user(..)`.

pub mod job_posting;
pub mod user;
