use std::fmt;

use sea_orm::{entity::prelude::EnumIter, Iterable};
use serde::{Deserialize, Serialize};

/// Category of portal user, governing which dashboards and operations they may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Tnp,
    Recruiter,
    Faculty,
    Hod,
}

impl UserType {
    /// Value stored in the `user_type` column for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Tnp => "tnp",
            Self::Recruiter => "recruiter",
            Self::Faculty => "faculty",
            Self::Hod => "hod",
        }
    }

    /// Parses a stored column value, `None` for anything outside the known roles.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::iter().find(|user_type| user_type.as_str() == value)
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role as stored on a user record.
///
/// Users are provisioned outside the portal, so the column may hold values the portal has
/// no role for. Those are kept verbatim as [`UserRole::Unrecognized`] instead of failing
/// to load the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Known(UserType),
    Unrecognized(String),
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(user_type) => user_type.as_str(),
            Self::Unrecognized(value) => value,
        }
    }

    /// The known role, `None` for unrecognized values.
    pub fn user_type(&self) -> Option<UserType> {
        match self {
            Self::Known(user_type) => Some(*user_type),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<UserType> for UserRole {
    fn from(user_type: UserType) -> Self {
        Self::Known(user_type)
    }
}

impl From<String> for UserRole {
    fn from(value: String) -> Self {
        match UserType::from_value(&value) {
            Some(user_type) => Self::Known(user_type),
            None => Self::Unrecognized(value),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Known(user_type) => user_type.as_str().to_string(),
            UserRole::Unrecognized(value) => value,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
