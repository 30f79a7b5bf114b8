use crate::shared::core::primitives::Location;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const ATTENDANCE_TABLE: &str = "attendance_records";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    EarlyLeave,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Late => "late",
            AttendanceStatus::EarlyLeave => "early_leave",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown attendance status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for AttendanceStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "late" => Ok(AttendanceStatus::Late),
            "early_leave" => Ok(AttendanceStatus::EarlyLeave),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// One person's attendance for one calendar day. Unique per (user_id, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub clock_in_time: Option<DateTime<Utc>>,
    pub clock_out_time: Option<DateTime<Utc>>,
    pub status: AttendanceStatus,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AttendanceRecord {
    pub fn location(&self) -> Option<Location> {
        match (self.location_lat, self.location_lng) {
            (Some(lat), Some(lng)) => Some(Location { lat, lng }),
            _ => None,
        }
    }
}

/// Insert-or-update keyed by (user_id, date). Columns not named here keep
/// their stored value on update; `location: None` leaves the stored location
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceUpsert {
    pub user_id: String,
    pub date: NaiveDate,
    pub clock_in_time: DateTime<Utc>,
    pub status: AttendanceStatus,
    pub location: Option<Location>,
}

/// Partial update by record id.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendancePatch {
    pub clock_out_time: DateTime<Utc>,
    pub location: Option<Location>,
}
