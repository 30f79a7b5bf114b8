use crate::modules::leave::adapters::outbound::leave_store::{LeaveStore, LeaveStoreError};
use crate::modules::leave::core::leave_request::{
    LEAVE_TABLE, LeaveRequest, LeaveReview, LeaveStatus, NewLeaveRequest,
};
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::change_feed::{ChangeFeed, ChangeKind, ChangeNotification};
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct InMemoryLeaveStore {
    requests: RwLock<Vec<LeaveRequest>>,
    clock: Arc<dyn Clock>,
    feed: Option<Arc<dyn ChangeFeed>>,
    is_offline: AtomicBool,
}

impl InMemoryLeaveStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            requests: RwLock::new(Vec::new()),
            clock,
            feed: None,
            is_offline: AtomicBool::new(false),
        }
    }

    pub fn with_change_feed(mut self, feed: Arc<dyn ChangeFeed>) -> Self {
        self.feed = Some(feed);
        self
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), LeaveStoreError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(LeaveStoreError::Backend("Leave store offline".into()));
        }
        Ok(())
    }

    fn publish(&self, user_id: &str, kind: ChangeKind) {
        if let Some(feed) = &self.feed {
            feed.publish(ChangeNotification {
                table: LEAVE_TABLE.to_string(),
                user_id: user_id.to_string(),
                kind,
            });
        }
    }
}

#[async_trait]
impl LeaveStore for InMemoryLeaveStore {
    async fn insert(&self, request: NewLeaveRequest) -> Result<LeaveRequest, LeaveStoreError> {
        self.ensure_online()?;
        let now = self.clock.now();
        let created = LeaveRequest {
            id: Uuid::now_v7().to_string(),
            user_id: request.user_id,
            leave_type: request.leave_type,
            start_date: request.start_date,
            end_date: request.end_date,
            reason: request.reason,
            status: LeaveStatus::Pending,
            approved_by: None,
            approved_at: None,
            rejection_reason: None,
            created_at: now,
            updated_at: now,
        };
        self.requests.write().await.push(created.clone());
        self.publish(&created.user_id, ChangeKind::Insert);
        Ok(created)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LeaveRequest>, LeaveStoreError> {
        self.ensure_online()?;
        let guard = self.requests.read().await;
        Ok(guard.iter().find(|r| r.id == id).cloned())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<LeaveRequest>, LeaveStoreError> {
        self.ensure_online()?;
        let guard = self.requests.read().await;
        // Later inserts first among equal timestamps.
        let mut items: Vec<LeaveRequest> = guard
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn count_pending(&self) -> Result<usize, LeaveStoreError> {
        self.ensure_online()?;
        let guard = self.requests.read().await;
        Ok(guard
            .iter()
            .filter(|r| r.status == LeaveStatus::Pending)
            .count())
    }

    async fn list_pending(&self) -> Result<Vec<LeaveRequest>, LeaveStoreError> {
        self.ensure_online()?;
        let guard = self.requests.read().await;
        let mut items: Vec<LeaveRequest> = guard
            .iter()
            .rev()
            .filter(|r| r.status == LeaveStatus::Pending)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(items)
    }

    async fn apply_review(
        &self,
        id: &str,
        review: LeaveReview,
    ) -> Result<LeaveRequest, LeaveStoreError> {
        self.ensure_online()?;
        let updated = {
            let mut guard = self.requests.write().await;
            let request = guard
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| LeaveStoreError::NotFound(id.to_string()))?;
            request.status = review.status;
            request.approved_by = Some(review.reviewer_id);
            request.approved_at = Some(review.reviewed_at);
            request.rejection_reason = review.rejection_reason;
            request.updated_at = self.clock.now();
            request.clone()
        };
        self.publish(&updated.user_id, ChangeKind::Update);
        Ok(updated)
    }
}
