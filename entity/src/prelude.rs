pub use super::job_posting::Entity as JobPosting;
pub use super::portal_user::Entity as PortalUser;
