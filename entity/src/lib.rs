//! SeaORM entities for the placement portal database.

pub mod prelude;

pub mod job_posting;
pub mod portal_user;
pub mod role;
