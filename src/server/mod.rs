//! Server application core modules.
//!
//! This module contains all server-side functionality of the placement portal: HTTP routing,
//! the authorization gate guarding each role-specific route, session lifecycle, credential
//! verification, and database access for users and job postings.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
