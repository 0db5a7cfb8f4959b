//! User fixture utilities.

pub mod factory;

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use entity::role::UserType;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_PASSWORD, TEST_USER_NAME},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with the provided credentials, hashing the password with argon2
    pub async fn insert_user(
        &self,
        email: &str,
        password: &str,
        user_type: Option<UserType>,
    ) -> Result<entity::portal_user::Model, TestError> {
        self.insert_user_with_role_value(email, password, user_type.map(|t| t.as_str()))
            .await
    }

    /// Insert a user whose `user_type` column holds the provided raw value
    ///
    /// Allows seeding roles the portal does not know, as provisioned by other systems.
    pub async fn insert_user_with_role_value(
        &self,
        email: &str,
        password: &str,
        role_value: Option<&str>,
    ) -> Result<entity::portal_user::Model, TestError> {
        let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
            .map_err(|e| TestError::PasswordHash(e.to_string()))?;
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| TestError::PasswordHash(e.to_string()))?
            .to_string();

        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::PortalUser::insert(entity::portal_user::ActiveModel {
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(password_hash),
                user_type: ActiveValue::Set(role_value.map(str::to_string)),
                name: ActiveValue::Set(TEST_USER_NAME.to_string()),
                profile_picture: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a user of the provided type with [`TEST_PASSWORD`] and an email derived from
    /// the type, e.g. `student@example.com` or `unset@example.com`
    pub async fn insert_mock_user(
        &self,
        user_type: Option<UserType>,
    ) -> Result<entity::portal_user::Model, TestError> {
        self.insert_user(&factory::mock_email(user_type), TEST_PASSWORD, user_type)
            .await
    }
}
