use crate::modules::attendance::adapters::outbound::attendance_store::AttendanceStore;
use crate::modules::attendance::core::day::AttendanceDay;
use crate::modules::attendance::core::decision::Decision;
use crate::modules::attendance::core::policy::ReclockPolicy;
use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::use_cases::clock_in::command::ClockIn;
use crate::modules::attendance::use_cases::clock_in::decide::decide_clock_in;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use std::sync::Arc;
use tracing::{info, warn};

pub struct ClockInHandler<TStore>
where
    TStore: AttendanceStore + 'static,
{
    store: Arc<TStore>,
    policy: ReclockPolicy,
}

impl<TStore> ClockInHandler<TStore>
where
    TStore: AttendanceStore + 'static,
{
    pub fn new(store: Arc<TStore>, policy: ReclockPolicy) -> Self {
        Self { store, policy }
    }

    pub async fn handle(&self, command: ClockIn) -> Result<AttendanceRecord, ApplicationError> {
        let existing = self
            .store
            .find_by_user_and_date(&command.user_id, command.date)
            .await?;
        let day = AttendanceDay::of(existing.as_ref());

        match decide_clock_in(&day, command, self.policy) {
            Decision::Accepted { write, overwrites } => {
                if let Some(previous) = overwrites {
                    warn!(
                        user_id = %write.user_id,
                        date = %write.date,
                        previous = %previous,
                        replacement = %write.clock_in_time,
                        "overwriting an earlier clock-in"
                    );
                }
                let record = self.store.upsert(write).await?;
                info!(user_id = %record.user_id, record_id = %record.id, date = %record.date, "clocked in");
                Ok(record)
            }
            Decision::Rejected { reason } => Err(reason.into()),
        }
    }
}
