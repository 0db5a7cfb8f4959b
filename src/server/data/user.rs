//! Portal user persistence.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Fields of a user that may be changed after creation.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Default, Clone)]
pub struct UserUpdate {
    /// New display name
    pub name: Option<String>,
    /// Public path of a new profile picture
    pub profile_picture: Option<String>,
    /// New argon2 PHC string
    pub password_hash: Option<String>,
}

/// Repository for reading and updating portal users.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by primary key
    pub async fn find_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::portal_user::Model>, DbErr> {
        entity::prelude::PortalUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Finds a user by exact email match
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::portal_user::Model>, DbErr> {
        entity::prelude::PortalUser::find()
            .filter(entity::portal_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Applies the set fields of `update` to a user
    ///
    /// Returns `Ok(None)` if no user exists with the provided ID.
    pub async fn update_fields(
        &self,
        user_id: i32,
        update: UserUpdate,
    ) -> Result<Option<entity::portal_user::Model>, DbErr> {
        let Some(user) = self.find_by_id(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();

        if let Some(name) = update.name {
            user_am.name = ActiveValue::Set(name);
        }
        if let Some(profile_picture) = update.profile_picture {
            user_am.profile_picture = ActiveValue::Set(Some(profile_picture));
        }
        if let Some(password_hash) = update.password_hash {
            user_am.password_hash = ActiveValue::Set(password_hash);
        }
        user_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }
}
