use crate::modules::attendance::core::record::{
    AttendancePatch, AttendanceRecord, AttendanceUpsert,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("attendance record not found: {0}")]
    NotFound(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Row store for attendance records. `(user_id, date)` is unique.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    async fn find_by_user_and_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, StoreError>;

    /// Most recent first, at most `limit` rows.
    async fn list_by_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<AttendanceRecord>, StoreError>;

    async fn list_by_date(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>, StoreError>;

    async fn upsert(&self, upsert: AttendanceUpsert) -> Result<AttendanceRecord, StoreError>;

    async fn update(
        &self,
        record_id: &str,
        patch: AttendancePatch,
    ) -> Result<AttendanceRecord, StoreError>;
}
