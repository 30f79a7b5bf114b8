use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// What a second clock-in (or clock-out) on the same day does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReclockPolicy {
    /// Rewrite the stored timestamp and log the overwrite.
    #[default]
    Overwrite,
    Reject,
}

impl ReclockPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReclockPolicy::Overwrite => "overwrite",
            ReclockPolicy::Reject => "reject",
        }
    }
}

impl fmt::Display for ReclockPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown re-clock policy: {0} (expected overwrite or reject)")]
pub struct UnknownPolicy(pub String);

impl FromStr for ReclockPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(ReclockPolicy::Overwrite),
            "reject" => Ok(ReclockPolicy::Reject),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}
