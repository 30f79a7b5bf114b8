use crate::shared::core::primitives::Location;
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct ClockIn {
    pub user_id: String,
    pub date: NaiveDate,
    pub at: DateTime<Utc>,
    pub location: Option<Location>,
}
