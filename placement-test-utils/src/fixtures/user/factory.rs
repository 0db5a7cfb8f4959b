//! Factory functions for generating mock user values.
//!
//! Pure functions without database interaction, suitable for unit tests.

use chrono::Utc;
use entity::role::UserType;

use crate::constant::TEST_USER_NAME;

/// Email used by mock users of the provided type.
pub fn mock_email(user_type: Option<UserType>) -> String {
    match user_type {
        Some(user_type) => format!("{}@example.com", user_type),
        None => "unset@example.com".to_string(),
    }
}

/// Create a mock user database model for testing.
///
/// The password hash is not a valid PHC string; use the user fixtures when the password
/// needs to verify.
pub fn mock_user_model(user_id: i32, user_type: Option<UserType>) -> entity::portal_user::Model {
    let now = Utc::now().naive_utc();
    entity::portal_user::Model {
        id: user_id,
        email: mock_email(user_type),
        password_hash: "not-a-hash".to_string(),
        user_type: user_type.map(|t| t.as_str().to_string()),
        name: TEST_USER_NAME.to_string(),
        profile_picture: None,
        created_at: now,
        updated_at: now,
    }
}
