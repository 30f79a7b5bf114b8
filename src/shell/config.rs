// Runtime configuration, read from ATTENDANCE_* environment variables.
//
// `main` loads `.env` first; tests build an `AppConfig` directly or through
// `from_lookup` with a map.

use crate::modules::attendance::core::policy::ReclockPolicy;
use crate::modules::attendance::sync::attendance_sync::{
    DEFAULT_DEBOUNCE, DEFAULT_HISTORY_LIMIT, SyncSettings,
};
use crate::shared::core::primitives::Location;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("ATTENDANCE_SITE_LAT and ATTENDANCE_SITE_LNG must be set together")]
    PartialSiteLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` keeps the session in memory only.
    pub session_file: Option<PathBuf>,
    pub history_limit: usize,
    pub refresh_debounce: Duration,
    pub reclock_policy: ReclockPolicy,
    /// Position reported by the geolocation adapter. `None` means unavailable.
    pub site_location: Option<Location>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            session_file: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
            refresh_debounce: DEFAULT_DEBOUNCE,
            reclock_policy: ReclockPolicy::default(),
            site_location: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = parse(
            "ATTENDANCE_BIND_ADDR",
            read("ATTENDANCE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        )?;
        let session_file = read("ATTENDANCE_SESSION_FILE").map(PathBuf::from);
        let history_limit = match read("ATTENDANCE_HISTORY_LIMIT") {
            Some(raw) => parse("ATTENDANCE_HISTORY_LIMIT", raw)?,
            None => DEFAULT_HISTORY_LIMIT,
        };
        let refresh_debounce = match read("ATTENDANCE_REFRESH_DEBOUNCE_MS") {
            Some(raw) => Duration::from_millis(parse("ATTENDANCE_REFRESH_DEBOUNCE_MS", raw)?),
            None => DEFAULT_DEBOUNCE,
        };
        let reclock_policy = match read("ATTENDANCE_RECLOCK_POLICY") {
            Some(raw) => parse("ATTENDANCE_RECLOCK_POLICY", raw)?,
            None => ReclockPolicy::default(),
        };
        let site_location = match (read("ATTENDANCE_SITE_LAT"), read("ATTENDANCE_SITE_LNG")) {
            (Some(lat), Some(lng)) => Some(Location {
                lat: parse("ATTENDANCE_SITE_LAT", lat)?,
                lng: parse("ATTENDANCE_SITE_LNG", lng)?,
            }),
            (None, None) => None,
            _ => return Err(ConfigError::PartialSiteLocation),
        };

        Ok(Self {
            bind_addr,
            session_file,
            history_limit,
            refresh_debounce,
            reclock_policy,
            site_location,
        })
    }

    pub fn sync_settings(&self) -> SyncSettings {
        SyncSettings {
            history_limit: self.history_limit,
            debounce: self.refresh_debounce,
            reclock_policy: self.reclock_policy,
        }
    }
}

fn parse<T>(key: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw.trim().parse() {
        Ok(value) => Ok(value),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value: raw,
        }),
    }
}
