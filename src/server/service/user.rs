//! User profile service.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::{UserRepository, UserUpdate},
        error::Error,
        model::db::UserModel,
    },
};

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        let user_type = user.role();
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            user_type,
            profile_picture: user.profile_picture,
        }
    }
}

/// Profile changes submitted by a student.
#[derive(Debug, Default, Clone)]
pub struct ProfileUpdate {
    /// New display name, ignored when empty
    pub name: Option<String>,
    /// Public path of a newly uploaded profile picture
    pub profile_picture: Option<String>,
}

/// Service for reading and updating user profiles.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user's profile.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        Ok(user.map(UserDto::from))
    }

    /// Applies a profile update.
    ///
    /// Blank names are ignored so that submitting the form with only a picture keeps the
    /// current name.
    ///
    /// # Returns
    /// - `Ok(Some(UserDto))` - Updated profile
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_profile(
        &self,
        user_id: i32,
        update: ProfileUpdate,
    ) -> Result<Option<UserDto>, Error> {
        let name = update
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let user = UserRepository::new(self.db)
            .update_fields(
                user_id,
                UserUpdate {
                    name,
                    profile_picture: update.profile_picture,
                    password_hash: None,
                },
            )
            .await?;

        Ok(user.map(UserDto::from))
    }
}
