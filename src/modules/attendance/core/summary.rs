use crate::modules::attendance::core::record::{AttendanceRecord, AttendanceStatus};
use chrono::TimeDelta;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistorySummary {
    pub present: u32,
    pub absent: u32,
    pub late: u32,
    pub early_leave: u32,
    pub worked_minutes: i64,
    pub worked: String,
}

/// Per-status day counts and total worked time. Only days with both a
/// clock-in and a later clock-out add worked time.
pub fn summarize(records: &[AttendanceRecord]) -> HistorySummary {
    let mut summary = HistorySummary::default();
    let mut worked = TimeDelta::zero();
    for record in records {
        match record.status {
            AttendanceStatus::Present => summary.present += 1,
            AttendanceStatus::Absent => summary.absent += 1,
            AttendanceStatus::Late => summary.late += 1,
            AttendanceStatus::EarlyLeave => summary.early_leave += 1,
        }
        if let (Some(clock_in), Some(clock_out)) = (record.clock_in_time, record.clock_out_time) {
            if clock_out > clock_in {
                worked += clock_out - clock_in;
            }
        }
    }
    summary.worked_minutes = worked.num_minutes();
    summary.worked = format_worked(worked);
    summary
}

/// `8 Jam 50 Menit`. Seconds are truncated.
pub fn format_worked(worked: TimeDelta) -> String {
    let minutes = worked.num_minutes().max(0);
    format!("{} Jam {} Menit", minutes / 60, minutes % 60)
}
