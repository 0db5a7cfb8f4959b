//! Server application models and type definitions.
//!
//! This module contains data models for the server application: application state,
//! database model type aliases, and typed session data.

pub mod app;
pub mod db;
pub mod session;
