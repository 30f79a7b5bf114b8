use crate::shared::core::primitives::Location;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct ClockOut {
    pub at: DateTime<Utc>,
    pub location: Option<Location>,
}
