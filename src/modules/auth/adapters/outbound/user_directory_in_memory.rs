// In memory user directory.
//
// Purpose
// - Run login, signup and the dashboards without an identity service.
//
// Responsibilities
// - Hold accounts matched by email (trimmed, case-insensitive).
// - Seed users share one placeholder password; signups keep their own.

use crate::modules::auth::adapters::outbound::user_directory::{DirectoryError, UserDirectory};
use crate::modules::auth::core::user::{NewAccount, User};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

pub const DEMO_PASSWORD: &str = "password123";

const DEMO_USERS: &str = include_str!("demo_users.json");

struct Account {
    user: User,
    password: String,
}

pub struct InMemoryUserDirectory {
    accounts: RwLock<Vec<Account>>,
    is_offline: AtomicBool,
}

impl InMemoryUserDirectory {
    pub fn new(users: Vec<User>, password: impl Into<String>) -> Self {
        let password = password.into();
        let accounts = users
            .into_iter()
            .map(|user| Account {
                user,
                password: password.clone(),
            })
            .collect();
        Self {
            accounts: RwLock::new(accounts),
            is_offline: AtomicBool::new(false),
        }
    }

    pub fn with_demo_users() -> Result<Self, serde_json::Error> {
        let users: Vec<User> = serde_json::from_str(DEMO_USERS)?;
        Ok(Self::new(users, DEMO_PASSWORD))
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), DirectoryError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(DirectoryError::Unavailable("User directory offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, DirectoryError> {
        self.ensure_online()?;
        let email = email.trim();
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|a| a.user.email.eq_ignore_ascii_case(email))
            .filter(|a| a.password == password)
            .map(|a| a.user.clone()))
    }

    async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        self.ensure_online()?;
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().map(|a| a.user.clone()).collect())
    }

    async fn register(&self, account: NewAccount) -> Result<User, DirectoryError> {
        self.ensure_online()?;
        let email = account.email.trim();
        let mut accounts = self.accounts.write().await;
        if accounts
            .iter()
            .any(|a| a.user.email.eq_ignore_ascii_case(email))
        {
            return Err(DirectoryError::EmailTaken(email.to_string()));
        }

        let next = accounts
            .iter()
            .filter(|a| a.user.role == account.role)
            .count()
            + 1;
        let user = User {
            id: Uuid::now_v7().to_string(),
            name: account.name.trim().to_string(),
            email: email.to_string(),
            role: account.role,
            employee_id: format!("{}{next:03}", account.role.staff_prefix()),
            avatar: None,
            department: None,
        };
        accounts.push(Account {
            user: user.clone(),
            password: account.password,
        });
        Ok(user)
    }
}
