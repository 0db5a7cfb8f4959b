use sea_orm::entity::prelude::*;

use crate::role::UserRole;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "portal_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    /// Raw role value, see [`Model::role`]
    #[sea_orm(column_type = "String(StringLen::N(16))", nullable)]
    pub user_type: Option<String>,
    pub name: String,
    pub profile_picture: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Model {
    /// Parsed role of the user, `None` when unset.
    pub fn role(&self) -> Option<UserRole> {
        self.user_type.clone().map(UserRole::from)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
