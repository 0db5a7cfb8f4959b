//! Test utilities for the placement portal.
//!
//! Tests are set up in two phases: configure a [`TestBuilder`] with the tables and fixtures
//! the test needs, then `build()` it into a [`TestContext`] holding an in-memory SQLite
//! database, a memory-backed session and a temporary upload directory.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod store;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::TEST_PASSWORD, fixtures::user::factory, store::FailingDeleteStore, TestBuilder,
        TestContext, TestError,
    };
}
