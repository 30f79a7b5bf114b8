use crate::shared::core::primitives::Location;
use crate::shared::infrastructure::geolocation::{GeolocationError, GeolocationProvider};

/// Reports a configured site position, or `Unavailable` when none is set.
#[derive(Debug, Clone, Default)]
pub struct FixedGeolocation {
    location: Option<Location>,
}

impl FixedGeolocation {
    pub fn at(location: Location) -> Self {
        Self {
            location: Some(location),
        }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl GeolocationProvider for FixedGeolocation {
    async fn current_position(&self) -> Result<Location, GeolocationError> {
        self.location.ok_or(GeolocationError::Unavailable)
    }
}
