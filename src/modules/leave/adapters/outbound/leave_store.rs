use crate::modules::leave::core::leave_request::{LeaveRequest, LeaveReview, NewLeaveRequest};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LeaveStoreError {
    #[error("leave request not found: {0}")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait LeaveStore: Send + Sync {
    async fn insert(&self, request: NewLeaveRequest) -> Result<LeaveRequest, LeaveStoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<LeaveRequest>, LeaveStoreError>;

    /// Newest first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<LeaveRequest>, LeaveStoreError>;

    async fn count_pending(&self) -> Result<usize, LeaveStoreError>;

    /// Every user's pending requests, newest first.
    async fn list_pending(&self) -> Result<Vec<LeaveRequest>, LeaveStoreError>;

    async fn apply_review(
        &self,
        id: &str,
        review: LeaveReview,
    ) -> Result<LeaveRequest, LeaveStoreError>;
}
