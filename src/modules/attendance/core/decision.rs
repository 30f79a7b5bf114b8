use chrono::{DateTime, Utc};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("already clocked in today")]
    AlreadyClockedIn,

    #[error("already clocked out today")]
    AlreadyClockedOut,

    #[error("cannot clock out before clocking in")]
    NotClockedIn,

    #[error("clock-out must not precede clock-in")]
    ClockOutBeforeClockIn,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decision<W> {
    /// `overwrites` holds the timestamp this write replaces, if any.
    Accepted {
        write: W,
        overwrites: Option<DateTime<Utc>>,
    },
    Rejected {
        reason: DecideError,
    },
}
