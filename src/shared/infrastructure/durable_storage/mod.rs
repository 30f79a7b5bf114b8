// Durable on-device key/value storage, used for "remember me" session hydration.
//
// Calls are synchronous: hydration happens once at start-up, before anything
// else reads the session.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage payload is not valid json: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

pub trait DurableStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub mod in_memory;
pub mod json_file;
