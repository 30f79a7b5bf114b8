// What login, signup and the admin dashboard need from the identity provider.
//
// Credential checking lives behind this port; the in-memory adapter is a
// placeholder until a real authentication service is wired in.

use crate::modules::auth::core::user::{NewAccount, User};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("directory unavailable: {0}")]
    Unavailable(String),

    #[error("email already registered: {0}")]
    EmailTaken(String),
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// `Ok(None)` for unknown email and wrong password alike.
    async fn authenticate(&self, email: &str, password: &str)
    -> Result<Option<User>, DirectoryError>;

    async fn list_users(&self) -> Result<Vec<User>, DirectoryError>;

    /// Creates the account and returns its user. Does not sign anyone in.
    async fn register(&self, account: NewAccount) -> Result<User, DirectoryError>;
}
