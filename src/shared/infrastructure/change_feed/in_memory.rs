use crate::shared::infrastructure::change_feed::{
    ChangeFeed, ChangeFilter, ChangeNotification, Subscription,
};
use tokio::sync::broadcast;
use tracing::trace;

const DEFAULT_CAPACITY: usize = 64;

pub struct InMemoryChangeFeed {
    sender: broadcast::Sender<ChangeNotification>,
}

impl Default for InMemoryChangeFeed {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl InMemoryChangeFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl ChangeFeed for InMemoryChangeFeed {
    fn publish(&self, notification: ChangeNotification) {
        trace!(table = %notification.table, user_id = %notification.user_id, kind = ?notification.kind, "publishing change");
        // Publishing with nobody listening is fine.
        let _ = self.sender.send(notification);
    }

    fn subscribe(&self, filter: ChangeFilter) -> Subscription {
        Subscription::new(self.sender.subscribe(), filter)
    }
}
