use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::error;

pub struct FetchHistoryHandler<TStore>
where
    TStore: AttendanceStore + 'static,
{
    store: Arc<TStore>,
    limit: usize,
}

impl<TStore> FetchHistoryHandler<TStore>
where
    TStore: AttendanceStore + 'static,
{
    pub fn new(store: Arc<TStore>, limit: usize) -> Self {
        Self { store, limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Up to `limit` records, most recent date first.
    pub async fn handle(&self, user_id: &str) -> Result<Vec<AttendanceRecord>, ApplicationError> {
        self.store
            .list_by_user(user_id, self.limit)
            .await
            .map_err(|e| {
                error!(user_id, error = %e, "error fetching attendance history");
                ApplicationError::Store(e)
            })
    }
}
