//! Database model type aliases.
//!
//! Convenient aliases for SeaORM entity models so that signatures throughout the server
//! don't need to spell out the `entity` crate paths.

/// Type alias for a portal user database model.
///
/// # Fields (from `entity::portal_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `email` - Login email, unique
/// - `password_hash` - Argon2 PHC string
/// - `user_type` - Raw role value, `None` when unset; parse with `role()`
/// - `name` - Display name
/// - `profile_picture` - Public path of the uploaded profile picture
/// - `created_at` - Timestamp when the user was created
/// - `updated_at` - Timestamp of the last update
pub type UserModel = entity::portal_user::Model;

/// Type alias for a job posting database model.
///
/// # Fields (from `entity::job_posting::Model`)
/// - `id` - Primary key
/// - `company_name` - Hiring company
/// - `profile` - Job profile title
/// - `skills_required` - Required skills
/// - `eligibility` - Free text eligibility criteria
/// - `description` - Free text job description
/// - `apply_link` - Where to apply
/// - `created_at` - Timestamp when the posting was submitted
pub type JobPostingModel = entity::job_posting::Model;
