//! Utility functions for controller request handling.
//!
//! This module provides reusable helpers used across controllers: running the
//! authorization gate against the request's session and loading the logged in user.

pub mod gate;
pub mod get_user;
