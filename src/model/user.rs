use entity::role::UserRole;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    #[schema(value_type = Option<String>, example = "student")]
    pub user_type: Option<UserRole>,
    pub profile_picture: Option<String>,
}

/// Login form submitted to `POST /login`
#[derive(Deserialize, ToSchema)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Password reset form submitted to `POST /reset`
#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordForm {
    pub email: String,
    pub old_password: String,
    pub new_password: String,
}
