// Realtime change notifications for row-based tables.
//
// A notification only says "a row in this table, owned by this user, changed".
// Subscribers re-read whatever they need; no delta payload is carried.

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
    /// The subscriber fell behind and dropped notifications.
    Resync,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeNotification {
    pub table: String,
    pub user_id: String,
    pub kind: ChangeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeFilter {
    pub table: String,
    pub user_id: String,
}

impl ChangeFilter {
    pub fn new(table: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            user_id: user_id.into(),
        }
    }

    pub fn matches(&self, notification: &ChangeNotification) -> bool {
        notification.table == self.table && notification.user_id == self.user_id
    }
}

pub struct Subscription {
    receiver: broadcast::Receiver<ChangeNotification>,
    filter: ChangeFilter,
}

impl Subscription {
    pub fn new(receiver: broadcast::Receiver<ChangeNotification>, filter: ChangeFilter) -> Self {
        Self { receiver, filter }
    }

    pub fn filter(&self) -> &ChangeFilter {
        &self.filter
    }

    /// Next notification matching the filter. `None` once the feed is gone.
    pub async fn next(&mut self) -> Option<ChangeNotification> {
        loop {
            match self.receiver.recv().await {
                Ok(notification) if self.filter.matches(&notification) => {
                    return Some(notification);
                }
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, table = %self.filter.table, "change subscription lagged");
                    return Some(ChangeNotification {
                        table: self.filter.table.clone(),
                        user_id: self.filter.user_id.clone(),
                        kind: ChangeKind::Resync,
                    });
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

pub trait ChangeFeed: Send + Sync {
    fn publish(&self, notification: ChangeNotification);
    fn subscribe(&self, filter: ChangeFilter) -> Subscription;
}

pub mod in_memory;
