use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const LEAVE_TABLE: &str = "leave_requests";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    /// Badge text shown next to a request.
    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Menunggu",
            LeaveStatus::Approved => "Disetujui",
            LeaveStatus::Rejected => "Ditolak",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub user_id: String,
    /// Free text such as "Cuti Sakit" or "Cuti Tahunan".
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub status: LeaveStatus,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLeaveRequest {
    pub user_id: String,
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

/// Outcome of an admin review, applied to a pending request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveReview {
    pub status: LeaveStatus,
    pub reviewer_id: String,
    pub reviewed_at: DateTime<Utc>,
    pub rejection_reason: Option<String>,
}
