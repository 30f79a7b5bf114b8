use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::core::day::AttendanceDay;
use crate::modules::attendance::core::decision::Decision;
use crate::modules::attendance::core::policy::ReclockPolicy;
use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::use_cases::clock_out::command::ClockOut;
use crate::modules::attendance::use_cases::clock_out::decide::decide_clock_out;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::{info, warn};

pub struct ClockOutHandler<TStore>
where
    TStore: AttendanceStore + 'static,
{
    store: Arc<TStore>,
    policy: ReclockPolicy,
}

impl<TStore> ClockOutHandler<TStore>
where
    TStore: AttendanceStore + 'static,
{
    pub fn new(store: Arc<TStore>, policy: ReclockPolicy) -> Self {
        Self { store, policy }
    }

    /// Decides against `today` as the caller last saw it, then patches that
    /// record by id.
    pub async fn handle(
        &self,
        today: Option<&AttendanceRecord>,
        command: ClockOut,
    ) -> Result<AttendanceRecord, ApplicationError> {
        let day = AttendanceDay::of(today);
        // Only read once accepted, which implies a record.
        let record_id = today.map(|record| record.id.as_str()).unwrap_or_default();

        match decide_clock_out(&day, command, self.policy) {
            Decision::Accepted { write, overwrites } => {
                if let Some(previous) = overwrites {
                    warn!(
                        record_id = %record_id,
                        previous = %previous,
                        replacement = %write.clock_out_time,
                        "overwriting an earlier clock-out"
                    );
                }
                let record = self.store.update(record_id, write).await?;
                info!(user_id = %record.user_id, record_id = %record.id, date = %record.date, "clocked out");
                Ok(record)
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
