// The authenticated session for this client process.
//
// Constructed once by the shell and shared by `Arc`. Holds at most one user.
// Lifecycle: `hydrate` from durable storage on start, `sign_in` after a
// successful login, `sign_out` on logout.

use crate::modules::auth::core::user::User;
use crate::shared::infrastructure::durable_storage::{DurableStorage, StorageError};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

pub const SESSION_STORAGE_KEY: &str = "fruithub_user";

pub struct SessionStore {
    storage: Arc<dyn DurableStorage>,
    current: watch::Sender<Option<User>>,
    is_loading: AtomicBool,
}

impl SessionStore {
    /// Reads a remembered user, if any, then marks loading complete. Storage
    /// failures and corrupt payloads are logged and leave the session empty.
    pub fn hydrate(storage: Arc<dyn DurableStorage>) -> Self {
        let store = Self {
            storage,
            current: watch::Sender::new(None),
            is_loading: AtomicBool::new(true),
        };
        match store.read_remembered() {
            Ok(Some(user)) => {
                info!(user_id = %user.id, "session hydrated from storage");
                store.current.send_replace(Some(user));
            }
            Ok(None) => debug!("no stored session"),
            Err(e) => {
                warn!(error = %e, "discarding stored session");
                if let Err(e) = store.storage.remove(SESSION_STORAGE_KEY) {
                    error!(error = %e, "failed to clear stored session");
                }
            }
        }
        store.is_loading.store(false, Ordering::SeqCst);
        store
    }

    pub fn current(&self) -> Option<User> {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<User>> {
        self.current.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::SeqCst)
    }

    pub fn set_loading(&self, loading: bool) {
        self.is_loading.store(loading, Ordering::SeqCst);
    }

    /// Sets the current user and, when `remember` is set, persists it. A
    /// persistence failure does not undo the sign-in.
    pub fn sign_in(&self, user: User, remember: bool) {
        if remember {
            if let Err(e) = self.remember(&user) {
                error!(user_id = %user.id, error = %e, "failed to persist session");
            }
        }
        info!(user_id = %user.id, role = %user.role, remember, "signed in");
        self.current.send_replace(Some(user));
    }

    pub fn sign_out(&self) {
        let previous = self.current.send_replace(None);
        if let Err(e) = self.storage.remove(SESSION_STORAGE_KEY) {
            error!(error = %e, "failed to clear stored session");
        }
        if let Some(user) = previous {
            info!(user_id = %user.id, "signed out");
        }
    }

    fn remember(&self, user: &User) -> Result<(), StorageError> {
        let payload = serde_json::to_string(user)?;
        self.storage.set(SESSION_STORAGE_KEY, &payload)
    }

    fn read_remembered(&self) -> Result<Option<User>, StorageError> {
        match self.storage.get(SESSION_STORAGE_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod session_store_tests {
    use super::*;
    use crate::shared::infrastructure::durable_storage::in_memory::InMemoryStorage;
    use crate::shared::infrastructure::durable_storage::json_file::JsonFileStorage;
    use crate::tests::fixtures::users::{admin, sarah};
    use rstest::{fixture, rstest};

    #[fixture]
    fn storage() -> Arc<InMemoryStorage> {
        Arc::new(InMemoryStorage::new())
    }

    #[rstest]
    fn it_should_start_unauthenticated_with_empty_storage(storage: Arc<InMemoryStorage>) {
        let session = SessionStore::hydrate(storage);
        assert_eq!(session.current(), None);
        assert!(!session.is_loading());
    }

    #[rstest]
    fn it_should_hydrate_a_remembered_user(storage: Arc<InMemoryStorage>) {
        storage
            .set(SESSION_STORAGE_KEY, &serde_json::to_string(&sarah()).unwrap())
            .unwrap();
        let session = SessionStore::hydrate(storage);
        assert_eq!(session.current(), Some(sarah()));
    }

    #[rstest]
    fn it_should_discard_a_corrupt_stored_user(storage: Arc<InMemoryStorage>) {
        storage.set(SESSION_STORAGE_KEY, "{not json").unwrap();
        let session = SessionStore::hydrate(storage.clone());
        assert_eq!(session.current(), None);
        assert_eq!(storage.get(SESSION_STORAGE_KEY).unwrap(), None);
    }

    #[rstest]
    fn it_should_persist_only_when_remembered(storage: Arc<InMemoryStorage>) {
        let session = SessionStore::hydrate(storage.clone());
        session.sign_in(admin(), false);
        assert_eq!(session.current(), Some(admin()));
        assert_eq!(storage.get(SESSION_STORAGE_KEY).unwrap(), None);

        session.sign_in(sarah(), true);
        let stored: User =
            serde_json::from_str(&storage.get(SESSION_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, sarah());
    }

    #[rstest]
    fn it_should_clear_user_and_storage_on_sign_out(storage: Arc<InMemoryStorage>) {
        let session = SessionStore::hydrate(storage.clone());
        session.sign_in(sarah(), true);
        session.sign_out();
        assert_eq!(session.current(), None);
        assert_eq!(storage.get(SESSION_STORAGE_KEY).unwrap(), None);
    }

    #[rstest]
    fn it_should_stay_signed_in_when_storage_is_offline(storage: Arc<InMemoryStorage>) {
        let session = SessionStore::hydrate(storage.clone());
        storage.toggle_offline();
        session.sign_in(sarah(), true);
        assert_eq!(session.current(), Some(sarah()));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_notify_subscribers_of_user_changes(storage: Arc<InMemoryStorage>) {
        let session = SessionStore::hydrate(storage);
        let mut receiver = session.subscribe();
        session.sign_in(sarah(), false);
        receiver.changed().await.unwrap();
        assert_eq!(receiver.borrow_and_update().clone(), Some(sarah()));
    }

    #[rstest]
    fn it_should_remember_again_after_a_corrupt_session_file() {
        let path = std::env::temp_dir()
            .join("attendance-tests")
            .join(format!("{}.json", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{not json").unwrap();
        let storage = Arc::new(JsonFileStorage::new(path.clone()));

        let session = SessionStore::hydrate(storage.clone());
        assert_eq!(session.current(), None);
        session.sign_in(sarah(), true);

        let stored: User =
            serde_json::from_str(&storage.get(SESSION_STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, sarah());
        let restarted = SessionStore::hydrate(Arc::new(JsonFileStorage::new(path.clone())));
        assert_eq!(restarted.current(), Some(sarah()));
        let _ = std::fs::remove_file(&path);
    }
}
