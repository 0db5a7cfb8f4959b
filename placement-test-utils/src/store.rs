//! Session stores for exercising session store failures.

use async_trait::async_trait;
use tower_sessions::{
    session::{Id, Record},
    session_store::{self, SessionStore},
    MemoryStore,
};

/// Memory-backed session store whose `delete` always fails.
///
/// Creating, saving and loading sessions behave like [`MemoryStore`], so a session can be
/// authenticated normally before a logout is attempted against it.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(FailingDeleteStore::default());
/// let session = Session::new(None, store.clone(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FailingDeleteStore {
    inner: MemoryStore,
}

#[async_trait]
impl SessionStore for FailingDeleteStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        self.inner.create(record).await
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.inner.save(record).await
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        self.inner.load(session_id).await
    }

    async fn delete(&self, _session_id: &Id) -> session_store::Result<()> {
        Err(session_store::Error::Backend(
            "session store unavailable".to_string(),
        ))
    }
}
