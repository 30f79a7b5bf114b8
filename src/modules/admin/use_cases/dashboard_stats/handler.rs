use crate::modules::attendance::adapters::outbound::attendance_store::{
    AttendanceStore, StoreError,
};
use crate::modules::auth::adapters::outbound::user_directory::{DirectoryError, UserDirectory};
use crate::modules::auth::core::user::Role;
use crate::modules::leave::adapters::outbound::leave_store::{LeaveStore, LeaveStoreError};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::try_join;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Attendance(#[from] StoreError),

    #[error(transparent)]
    Leave(#[from] LeaveStoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub date: NaiveDate,
    pub total_employees: usize,
    pub present_today: usize,
    pub pending_leave: usize,
    /// Whole percent, rounded down. Zero without employees.
    pub attendance_rate: u32,
}

pub fn attendance_rate(present: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((present.min(total) * 100) / total) as u32
}

pub struct DashboardStatsHandler<TDirectory, TAttendance, TLeave>
where
    TDirectory: UserDirectory + 'static,
    TAttendance: AttendanceStore + 'static,
    TLeave: LeaveStore + 'static,
{
    directory: Arc<TDirectory>,
    attendance: Arc<TAttendance>,
    leave: Arc<TLeave>,
}

impl<TDirectory, TAttendance, TLeave> DashboardStatsHandler<TDirectory, TAttendance, TLeave>
where
    TDirectory: UserDirectory + 'static,
    TAttendance: AttendanceStore + 'static,
    TLeave: LeaveStore + 'static,
{
    pub fn new(directory: Arc<TDirectory>, attendance: Arc<TAttendance>, leave: Arc<TLeave>) -> Self {
        Self {
            directory,
            attendance,
            leave,
        }
    }

    pub async fn handle(&self, date: NaiveDate) -> Result<DashboardStats, DashboardError> {
        let (users, records, pending_leave) = try_join!(
            async { self.directory.list_users().await.map_err(DashboardError::from) },
            async { self.attendance.list_by_date(date).await.map_err(DashboardError::from) },
            async { self.leave.count_pending().await.map_err(DashboardError::from) },
        )?;

        let employees: HashSet<&str> = users
            .iter()
            .filter(|u| u.role == Role::Employee)
            .map(|u| u.id.as_str())
            .collect();
        let present_today = records
            .iter()
            .filter(|r| r.clock_in_time.is_some() && employees.contains(r.user_id.as_str()))
            .map(|r| r.user_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        Ok(DashboardStats {
            date,
            total_employees: employees.len(),
            present_today,
            pending_leave,
            attendance_rate: attendance_rate(present_today, employees.len()),
        })
    }
}
