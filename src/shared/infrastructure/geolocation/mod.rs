use crate::shared::core::primitives::Location;
use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum GeolocationError {
    #[error("position unavailable")]
    Unavailable,

    #[error("permission denied")]
    PermissionDenied,

    #[error("position request timed out")]
    Timeout,
}

#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    async fn current_position(&self) -> Result<Location, GeolocationError>;
}

/// One-shot position request. A failure is logged and yields no location, so
/// the caller simply omits location fields from its write.
pub async fn locate_best_effort(provider: &dyn GeolocationProvider) -> Option<Location> {
    match provider.current_position().await {
        Ok(location) => Some(location),
        Err(e) => {
            warn!(error = %e, "error getting location");
            None
        }
    }
}

pub mod fixed;
