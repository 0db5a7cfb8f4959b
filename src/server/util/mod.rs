//! Utility functions and helpers for server operations.
//!
//! Currently limited to writing uploaded profile pictures to the upload directory.

pub mod upload;
