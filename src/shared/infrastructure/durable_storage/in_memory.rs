use crate::shared::infrastructure::durable_storage::{DurableStorage, StorageError};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
pub struct InMemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    is_offline: AtomicBool,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StorageError::Backend("Storage offline".into()));
        }
        self.entries
            .lock()
            .map_err(|_| StorageError::Backend("storage lock poisoned".into()))
    }
}

impl DurableStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_storage_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_set_get_and_remove_a_value() {
        let storage = InMemoryStorage::new();
        storage.set("key", "value").unwrap();
        assert_eq!(storage.get("key").unwrap(), Some("value".to_string()));
        storage.remove("key").unwrap();
        assert_eq!(storage.get("key").unwrap(), None);
    }

    #[rstest]
    fn it_should_fail_if_the_storage_is_offline() {
        let storage = InMemoryStorage::new();
        storage.toggle_offline();
        let result = storage.set("key", "value");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Storage offline"));
    }
}
