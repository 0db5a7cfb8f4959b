//! Authorization gate.
//!
//! Every role-sensitive route runs two checks in order: [`require_authenticated`] and then
//! [`require_role`] with the route's allowed set. Role policy lives only here: the allowed
//! sets below and the [`dispatch`] table used wherever a user is redirected by role.

use entity::role::UserType;

use crate::server::{error::auth::AuthError, model::session::user::SessionUser};

/// Roles allowed on the student dashboard and profile routes.
pub const STUDENT_ROLES: &[UserType] = &[UserType::Student];
/// Roles allowed on the training-and-placement dashboard and job posting submission.
pub const TNP_ROLES: &[UserType] = &[UserType::Tnp];
/// Roles allowed on the recruiter dashboard.
pub const RECRUITER_ROLES: &[UserType] = &[UserType::Recruiter];
/// Roles allowed on the department dashboard.
pub const DEPARTMENT_ROLES: &[UserType] = &[UserType::Faculty, UserType::Hod];

/// Succeeds iff the session carries a logged in user.
///
/// # Returns
/// - `Ok(SessionUser)` - Session is authenticated
/// - `Err(AuthError::Unauthenticated)` - Session is anonymous
pub fn require_authenticated(user: Option<SessionUser>) -> Result<SessionUser, AuthError> {
    user.ok_or(AuthError::Unauthenticated)
}

/// Succeeds iff the authenticated user's role is in `allowed`.
///
/// # Returns
/// - `Ok(())` - Role is allowed
/// - `Err(AuthError::Unauthorized)` - Role is not allowed, unset or unrecognized, carrying the
///   stored role
pub fn require_role(user: &SessionUser, allowed: &[UserType]) -> Result<(), AuthError> {
    match user.role() {
        Some(role) if allowed.contains(&role) => Ok(()),
        _ => Err(AuthError::Unauthorized(user.user_type.clone())),
    }
}

/// Where a logged in user is sent based on their role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// `/student`
    StudentDashboard,
    /// `/TnP`
    TnpDashboard,
    /// `/recruiter`
    RecruiterDashboard,
    /// `/department`, shared by faculty and heads of department
    DepartmentDashboard,
    /// `/`, for users without a known role
    Home,
}

impl Destination {
    /// Route path of the destination.
    pub fn path(&self) -> &'static str {
        match self {
            Self::StudentDashboard => "/student",
            Self::TnpDashboard => "/TnP",
            Self::RecruiterDashboard => "/recruiter",
            Self::DepartmentDashboard => "/department",
            Self::Home => "/",
        }
    }
}

/// Maps a role to its landing page.
///
/// Users without a role and users whose stored role is unrecognized (see
/// [`SessionUser::role`]) land on the home page.
pub fn dispatch(user_type: Option<UserType>) -> Destination {
    match user_type {
        Some(UserType::Student) => Destination::StudentDashboard,
        Some(UserType::Tnp) => Destination::TnpDashboard,
        Some(UserType::Recruiter) => Destination::RecruiterDashboard,
        Some(UserType::Faculty | UserType::Hod) => Destination::DepartmentDashboard,
        None => Destination::Home,
    }
}
