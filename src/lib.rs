//! Campus placement portal.
//!
//! Students, training-and-placement staff, recruiters and faculty sign in to reach
//! role-specific dashboards, publish job postings, update their profile and reset
//! their password. Shared request/response types live in [`model`], everything that
//! touches the database or session store lives in [`server`].

pub mod model;
pub mod server;
