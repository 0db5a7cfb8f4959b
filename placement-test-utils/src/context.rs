//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context includes an
//! in-memory SQLite database, a session backed by a shared memory store, and a temporary
//! directory standing in for the upload directory.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;
use tower_sessions::{session::Id, MemoryStore, Session};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let test = TestBuilder::new().with_portal_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixtures helpers
/// test.user().insert_mock_user(Some(UserType::Student)).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Session for test authentication flows
    pub session: Session,
    /// Store backing `session`, shared with sessions created by [`TestContext::load_session`]
    pub store: Arc<MemoryStore>,

    /// Temporary upload directory, removed when the context is dropped
    pub(crate) upload_dir: TempDir,
}

impl TestContext {
    /// Convert database and upload directory into any type that can be constructed from them
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, PathBuf)>,
    {
        T::from((self.db.clone(), self.upload_dir.path().to_path_buf()))
    }

    /// Path of the temporary upload directory
    pub fn upload_dir(&self) -> &Path {
        self.upload_dir.path()
    }

    /// Loads the session with the provided ID from the shared store
    ///
    /// Models a later request presenting the same session cookie.
    pub fn load_session(&self, session_id: Option<Id>) -> Session {
        Session::new(session_id, self.store.clone(), None)
    }
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Database connection failed
    /// - `Err(TestError::IoError)` - Temporary directory could not be created
    pub(crate) async fn new() -> Result<Self, TestError> {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store.clone(), None);

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            session,
            store,
            upload_dir: tempfile::tempdir()?,
        })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
