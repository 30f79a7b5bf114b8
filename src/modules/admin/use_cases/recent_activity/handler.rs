// The admin dashboard's "recent activity" feed.
//
// Built on read from today's attendance rows and every pending leave request;
// nothing is stored. Entries are newest first and capped at `limit`.

use crate::modules::attendance::adapters::outbound::attendance_store::{
    AttendanceStore, StoreError,
};
use crate::modules::attendance::core::record::{AttendanceRecord, AttendanceStatus};
use crate::modules::auth::adapters::outbound::user_directory::{DirectoryError, UserDirectory};
use crate::modules::auth::core::user::User;
use crate::modules::leave::adapters::outbound::leave_store::{LeaveStore, LeaveStoreError};
use crate::modules::leave::core::leave_request::LeaveRequest;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::try_join;

pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Attendance(#[from] StoreError),

    #[error(transparent)]
    Leave(#[from] LeaveStoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityAction {
    #[serde(rename = "Clock In")]
    ClockIn,
    #[serde(rename = "Clock Out")]
    ClockOut,
    #[serde(rename = "Leave Request")]
    LeaveRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Success,
    Late,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub user_id: String,
    /// Display name, or the raw user id for an unknown user.
    pub employee: String,
    pub action: ActivityAction,
    pub at: DateTime<Utc>,
    /// `HH:MM`, UTC.
    pub time: String,
    pub status: ActivityStatus,
}

impl Activity {
    fn new(
        names: &HashMap<&str, &str>,
        user_id: &str,
        action: ActivityAction,
        at: DateTime<Utc>,
        status: ActivityStatus,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            employee: names.get(user_id).copied().unwrap_or(user_id).to_string(),
            action,
            at,
            time: at.format("%H:%M").to_string(),
            status,
        }
    }
}

/// Clock-ins (late when the row says so), clock-outs and pending leave,
/// newest first.
pub fn collect_activity(
    users: &[User],
    records: &[AttendanceRecord],
    pending: &[LeaveRequest],
    limit: usize,
) -> Vec<Activity> {
    let names: HashMap<&str, &str> = users
        .iter()
        .map(|u| (u.id.as_str(), u.name.as_str()))
        .collect();

    let mut items = Vec::new();
    for record in records {
        if let Some(at) = record.clock_in_time {
            let status = match record.status {
                AttendanceStatus::Late => ActivityStatus::Late,
                _ => ActivityStatus::Success,
            };
            items.push(Activity::new(&names, &record.user_id, ActivityAction::ClockIn, at, status));
        }
        if let Some(at) = record.clock_out_time {
            items.push(Activity::new(
                &names,
                &record.user_id,
                ActivityAction::ClockOut,
                at,
                ActivityStatus::Success,
            ));
        }
    }
    for request in pending {
        items.push(Activity::new(
            &names,
            &request.user_id,
            ActivityAction::LeaveRequest,
            request.created_at,
            ActivityStatus::Pending,
        ));
    }

    items.sort_by(|a, b| b.at.cmp(&a.at));
    items.truncate(limit);
    items
}

pub struct RecentActivityHandler<TDirectory, TAttendance, TLeave>
where
    TDirectory: UserDirectory + 'static,
    TAttendance: AttendanceStore + 'static,
    TLeave: LeaveStore + 'static,
{
    directory: Arc<TDirectory>,
    attendance: Arc<TAttendance>,
    leave: Arc<TLeave>,
    limit: usize,
}

impl<TDirectory, TAttendance, TLeave> RecentActivityHandler<TDirectory, TAttendance, TLeave>
where
    TDirectory: UserDirectory + 'static,
    TAttendance: AttendanceStore + 'static,
    TLeave: LeaveStore + 'static,
{
    pub fn new(
        directory: Arc<TDirectory>,
        attendance: Arc<TAttendance>,
        leave: Arc<TLeave>,
        limit: usize,
    ) -> Self {
        Self {
            directory,
            attendance,
            leave,
            limit,
        }
    }

    pub async fn handle(&self, date: NaiveDate) -> Result<Vec<Activity>, ActivityError> {
        let (users, records, pending) = try_join!(
            async { self.directory.list_users().await.map_err(ActivityError::from) },
            async { self.attendance.list_by_date(date).await.map_err(ActivityError::from) },
            async { self.leave.list_pending().await.map_err(ActivityError::from) },
        )?;
        Ok(collect_activity(&users, &records, &pending, self.limit))
    }
}
