use crate::modules::attendance::core::{
    day::AttendanceDay,
    decision::{DecideError, Decision},
    policy::ReclockPolicy,
    record::AttendancePatch,
};
use crate::modules::attendance::use_cases::clock_out::command::ClockOut;

pub fn decide_clock_out(
    day: &AttendanceDay,
    command: ClockOut,
    policy: ReclockPolicy,
) -> Decision<AttendancePatch> {
    let (clock_in_time, overwrites) = match day {
        AttendanceDay::NoRecord => {
            return Decision::Rejected {
                reason: DecideError::NotClockedIn,
            };
        }
        AttendanceDay::ClockedIn { clock_in_time, .. } => (*clock_in_time, None),
        AttendanceDay::ClockedOut {
            clock_in_time,
            clock_out_time,
            ..
        } => match policy {
            ReclockPolicy::Overwrite => (*clock_in_time, Some(*clock_out_time)),
            ReclockPolicy::Reject => {
                return Decision::Rejected {
                    reason: DecideError::AlreadyClockedOut,
                };
            }
        },
    };
    if command.at < clock_in_time {
        return Decision::Rejected {
            reason: DecideError::ClockOutBeforeClockIn,
        };
    }
    Decision::Accepted {
        write: AttendancePatch {
            clock_out_time: command.at,
            location: command.location,
        },
        overwrites,
    }
}
