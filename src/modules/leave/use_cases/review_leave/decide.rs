use crate::modules::auth::core::user::User;
use crate::modules::leave::core::decision::{Decision, LeaveDecideError};
use crate::modules::leave::core::leave_request::{LeaveRequest, LeaveReview, LeaveStatus};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject { reason: Option<String> },
}

pub fn decide_review(
    request: &LeaveRequest,
    reviewer: &User,
    action: ReviewAction,
    at: DateTime<Utc>,
) -> Decision<LeaveReview> {
    if !reviewer.is_admin() {
        return Decision::Rejected {
            reason: LeaveDecideError::NotAdmin,
        };
    }
    if request.status != LeaveStatus::Pending {
        return Decision::Rejected {
            reason: LeaveDecideError::AlreadyReviewed(request.status),
        };
    }
    let (status, rejection_reason) = match action {
        ReviewAction::Approve => (LeaveStatus::Approved, None),
        ReviewAction::Reject { reason } => (LeaveStatus::Rejected, reason),
    };
    Decision::Accepted {
        write: LeaveReview {
            status,
            reviewer_id: reviewer.id.clone(),
            reviewed_at: at,
            rejection_reason,
        },
    }
}
