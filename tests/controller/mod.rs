//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with a session from the test context, verifying the
//! authorization gate, session mutations and response mapping of each endpoint.


use placement_test_utils::prelude::*;
