use crate::modules::leave::core::leave_request::{LeaveRequest, LeaveStatus};
use crate::tests::fixtures::records::{at, day};
use chrono::Days;

/// Sarah's sick leave for the following Monday and Tuesday, not yet reviewed.
pub fn pending_leave() -> LeaveRequest {
    LeaveRequest {
        id: "leave-0001".to_string(),
        user_id: "2".to_string(),
        leave_type: "Cuti Sakit".to_string(),
        start_date: day() + Days::new(7),
        end_date: day() + Days::new(8),
        reason: "Demam dan flu".to_string(),
        status: LeaveStatus::Pending,
        approved_by: None,
        approved_at: None,
        rejection_reason: None,
        created_at: at(8, 0),
        updated_at: at(8, 0),
    }
}
