use crate::modules::attendance::core::record::AttendanceRecord;
use chrono::{DateTime, Utc};

/// Where one user's calendar day stands.
///
/// `NoRecord → ClockedIn → ClockedOut`. A stored record without a clock-in
/// counts as `NoRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceDay {
    NoRecord,
    ClockedIn {
        record_id: String,
        clock_in_time: DateTime<Utc>,
    },
    ClockedOut {
        record_id: String,
        clock_in_time: DateTime<Utc>,
        clock_out_time: DateTime<Utc>,
    },
}

impl AttendanceDay {
    pub fn of(record: Option<&AttendanceRecord>) -> Self {
        let Some(record) = record else {
            return AttendanceDay::NoRecord;
        };
        match (record.clock_in_time, record.clock_out_time) {
            (Some(clock_in_time), None) => AttendanceDay::ClockedIn {
                record_id: record.id.clone(),
                clock_in_time,
            },
            (Some(clock_in_time), Some(clock_out_time)) => AttendanceDay::ClockedOut {
                record_id: record.id.clone(),
                clock_in_time,
                clock_out_time,
            },
            (None, _) => AttendanceDay::NoRecord,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceDay::NoRecord => "no_record",
            AttendanceDay::ClockedIn { .. } => "clocked_in",
            AttendanceDay::ClockedOut { .. } => "clocked_out",
        }
    }
}
