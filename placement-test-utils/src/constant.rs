//! Constant values shared across tests.

/// Password given to users created by the mock user fixtures.
pub static TEST_PASSWORD: &str = "test_password";

/// Display name given to users created by the mock user fixtures.
pub static TEST_USER_NAME: &str = "Test User";
