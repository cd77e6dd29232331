//! Celestial and horizontal coordinate pairs.

use crate::config::units::{Degrees, Hours};

/// Position on the celestial sphere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EquatorialCoordinates {
    /// Right ascension, `[0, 24)` hours.
    pub right_ascension: Hours,
    /// Declination, `[-90, 90]` degrees.
    pub declination: Degrees,
}

impl EquatorialCoordinates {
    /// Create a new coordinate pair.
    pub const fn new(right_ascension: Hours, declination: Degrees) -> Self {
        Self {
            right_ascension,
            declination,
        }
    }
}

/// Position relative to the local horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HorizontalCoordinates {
    /// Altitude above the horizon, `[-90, 90]` degrees.
    pub altitude: Degrees,
    /// Azimuth from north through east, `[0, 360)` degrees.
    pub azimuth: Degrees,
}

impl HorizontalCoordinates {
    /// Create a new coordinate pair.
    pub const fn new(altitude: Degrees, azimuth: Degrees) -> Self {
        Self { altitude, azimuth }
    }
}
