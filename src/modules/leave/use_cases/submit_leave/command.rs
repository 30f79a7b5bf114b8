use crate::modules::leave::core::leave_request::NewLeaveRequest;
use chrono::NaiveDate;
use thiserror::Error;

/// A leave application as typed into the form. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitLeave {
    pub user_id: String,
    pub leave_type: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeaveValidationError {
    #[error("all fields are required")]
    MissingFields,

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("end date must not precede start date")]
    EndBeforeStart,
}

impl SubmitLeave {
    pub fn validate(self) -> Result<NewLeaveRequest, LeaveValidationError> {
        let leave_type = self.leave_type.trim();
        let reason = self.reason.trim();
        let start = self.start_date.trim();
        let end = self.end_date.trim();
        if [leave_type, reason, start, end].iter().any(|f| f.is_empty()) {
            return Err(LeaveValidationError::MissingFields);
        }

        let start_date = parse_date(start)?;
        let end_date = parse_date(end)?;
        if end_date < start_date {
            return Err(LeaveValidationError::EndBeforeStart);
        }

        Ok(NewLeaveRequest {
            user_id: self.user_id,
            leave_type: leave_type.to_string(),
            start_date,
            end_date,
            reason: reason.to_string(),
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, LeaveValidationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| LeaveValidationError::InvalidDate(raw.to_string()))
}
