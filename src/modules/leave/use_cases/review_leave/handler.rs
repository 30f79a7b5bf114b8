use crate::modules::auth::core::user::User;
use crate::modules::leave::adapters::outbound::leave_store::{LeaveStore, LeaveStoreError};
use crate::modules::leave::core::decision::{Decision, LeaveDecideError};
use crate::modules::leave::core::leave_request::LeaveRequest;
use crate::modules::leave::use_cases::review_leave::decide::{ReviewAction, decide_review};
use crate::shared::core::primitives::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ReviewLeaveError {
    #[error(transparent)]
    Store(#[from] LeaveStoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] LeaveDecideError),
}

pub struct ReviewLeaveHandler<TStore>
where
    TStore: LeaveStore + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
}

impl<TStore> ReviewLeaveHandler<TStore>
where
    TStore: LeaveStore + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn handle(
        &self,
        leave_id: &str,
        reviewer: &User,
        action: ReviewAction,
    ) -> Result<LeaveRequest, ReviewLeaveError> {
        let request = self
            .store
            .find_by_id(leave_id)
            .await?
            .ok_or_else(|| LeaveStoreError::NotFound(leave_id.to_string()))?;

        match decide_review(&request, reviewer, action, self.clock.now()) {
            Decision::Accepted { write } => {
                let reviewed = self.store.apply_review(leave_id, write).await?;
                info!(
                    leave_id,
                    reviewer_id = %reviewer.id,
                    status = ?reviewed.status,
                    "leave request reviewed"
                );
                Ok(reviewed)
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
