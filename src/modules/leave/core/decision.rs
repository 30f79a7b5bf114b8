use crate::modules::leave::core::leave_request::LeaveStatus;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LeaveDecideError {
    #[error("leave request already reviewed ({0:?})")]
    AlreadyReviewed(LeaveStatus),

    #[error("only an admin can review leave requests")]
    NotAdmin,
}

pub enum Decision<W> {
    Accepted { write: W },
    Rejected { reason: LeaveDecideError },
}
