use crate::modules::attendance::core::{
    day::AttendanceDay,
    decision::{DecideError, Decision},
    policy::ReclockPolicy,
    record::{AttendanceStatus, AttendanceUpsert},
};
use crate::modules::attendance::use_cases::clock_in::command::ClockIn;

pub fn decide_clock_in(
    day: &AttendanceDay,
    command: ClockIn,
    policy: ReclockPolicy,
) -> Decision<AttendanceUpsert> {
    let overwrites = match day {
        AttendanceDay::NoRecord => None,
        AttendanceDay::ClockedIn { clock_in_time, .. }
        | AttendanceDay::ClockedOut { clock_in_time, .. } => match policy {
            ReclockPolicy::Overwrite => Some(*clock_in_time),
            ReclockPolicy::Reject => {
                return Decision::Rejected {
                    reason: DecideError::AlreadyClockedIn,
                };
            }
        },
    };
    Decision::Accepted {
        write: AttendanceUpsert {
            user_id: command.user_id,
            date: command.date,
            clock_in_time: command.at,
            status: AttendanceStatus::Present,
            location: command.location,
        },
        overwrites,
    }
}
