//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods are chained and executed during the final `build()` call.

use entity::role::UserType;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_portal_tables: bool,

    users: Vec<(String, String, Option<UserType>)>, // (email, password, user_type)
    job_postings: Vec<String>,                      // company names
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_portal_tables: false,
            users: Vec::new(),
            job_postings: Vec::new(),
        }
    }

    /// Add the portal's tables (PortalUser, JobPosting) to the test database.
    pub fn with_portal_tables(mut self) -> Self {
        self.include_portal_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use placement_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), placement_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(PortalUser)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the provided credentials into the database.
    ///
    /// Requires the user table, e.g. via [`TestBuilder::with_portal_tables`].
    pub fn with_user(mut self, email: &str, password: &str, user_type: Option<UserType>) -> Self {
        self.users
            .push((email.to_string(), password.to_string(), user_type));
        self
    }

    /// Insert a mock job posting for the provided company into the database.
    pub fn with_job_posting(mut self, company_name: &str) -> Self {
        self.job_postings.push(company_name.to_string());
        self
    }

    /// Build the test context: create tables, then insert fixtures.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();

        if self.include_portal_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::PortalUser),
                schema.create_table_from_entity(entity::prelude::JobPosting),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for (email, password, user_type) in self.users {
            setup.user().insert_user(&email, &password, user_type).await?;
        }

        for company_name in self.job_postings {
            setup
                .job_posting()
                .insert_mock_job_posting(&company_name)
                .await?;
        }

        Ok(setup)
    }
}
