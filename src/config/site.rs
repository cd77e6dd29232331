//! Observer site configuration.

use serde::Deserialize;

use super::units::Degrees;

/// Geographic position of the observer.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ObserverPosition {
    /// Latitude in degrees, north positive.
    pub latitude: Degrees,
    /// Longitude in degrees, east positive.
    pub longitude: Degrees,
}

impl ObserverPosition {
    /// Create a new observer position.
    pub const fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that latitude lies in [-90, 90].
    pub fn latitude_is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude.0)
    }

    /// Check that longitude lies in [-180, 360).
    pub fn longitude_is_valid(&self) -> bool {
        (-180.0..360.0).contains(&self.longitude.0)
    }
}
