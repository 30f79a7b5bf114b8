use crate::modules::attendance::adapters::outbound::attendance_store::{
    AttendanceStore, StoreError,
};
use crate::modules::attendance::core::record::AttendanceRecord;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, error};

/// A missing row and a failed lookup are different things: the first clears
/// the cached day, the second leaves it alone.
#[derive(Debug)]
pub enum TodayOutcome {
    Found(AttendanceRecord),
    NotFound,
    Failed(StoreError),
}

pub struct FetchTodayHandler<TStore>
where
    TStore: AttendanceStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> FetchTodayHandler<TStore>
where
    TStore: AttendanceStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, user_id: &str, date: NaiveDate) -> TodayOutcome {
        match self.store.find_by_user_and_date(user_id, date).await {
            Ok(Some(record)) => TodayOutcome::Found(record),
            Ok(None) => {
                debug!(user_id, date = %date, "no attendance record today");
                TodayOutcome::NotFound
            }
            Err(e) => {
                error!(user_id, date = %date, error = %e, "error fetching today's attendance");
                TodayOutcome::Failed(e)
            }
        }
    }
}
