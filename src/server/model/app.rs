//! Shared application state.

use std::path::PathBuf;

use sea_orm::DatabaseConnection;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Credential store connection pool
    pub db: DatabaseConnection,
    /// Directory uploaded profile pictures are written to
    pub upload_dir: PathBuf,
}

impl From<(DatabaseConnection, PathBuf)> for AppState {
    fn from((db, upload_dir): (DatabaseConnection, PathBuf)) -> Self {
        Self { db, upload_dir }
    }
}
