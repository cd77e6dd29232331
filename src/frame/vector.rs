//! Frame-agnostic pointing directions.

use libm::{asin, atan2, cos, sin, sqrt};

use crate::config::units::{Degrees, Hours};

use super::coordinates::{EquatorialCoordinates, HorizontalCoordinates};

/// Unit vector in the mount's native frame.
///
/// Alt/az angles map with azimuth running clockwise (seen from above),
/// equatorial angles with right ascension running anticlockwise, so reading
/// an equatorial vector back as alt/az mirrors the hour circle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirectionVector {
    /// Toward azimuth 0 / RA 0 on the reference plane.
    pub x: f64,
    /// Completes the right-handed frame on the reference plane.
    pub y: f64,
    /// Toward the reference pole.
    pub z: f64,
}

impl DirectionVector {
    /// Create a vector from raw components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Vector for a horizontal coordinate pair.
    pub fn from_alt_az(coords: HorizontalCoordinates) -> Self {
        let alt = coords.altitude.to_radians();
        let az = coords.azimuth.to_radians();
        Self {
            x: cos(alt) * cos(az),
            y: -cos(alt) * sin(az),
            z: sin(alt),
        }
    }

    /// Read the vector back as a horizontal coordinate pair.
    pub fn to_alt_az(&self) -> HorizontalCoordinates {
        let unit = self.normalised();
        HorizontalCoordinates {
            altitude: Degrees::from_radians(asin(unit.z.clamp(-1.0, 1.0))),
            azimuth: Degrees::from_radians(atan2(-unit.y, unit.x)).wrapped(),
        }
    }

    /// Vector for an equatorial coordinate pair.
    pub fn from_equatorial(coords: EquatorialCoordinates) -> Self {
        let dec = coords.declination.to_radians();
        let ra = coords.right_ascension.to_degrees().to_radians();
        Self {
            x: cos(dec) * cos(ra),
            y: cos(dec) * sin(ra),
            z: sin(dec),
        }
    }

    /// Read the vector back as an equatorial coordinate pair.
    pub fn to_equatorial(&self) -> EquatorialCoordinates {
        let unit = self.normalised();
        let ra: Hours = Degrees::from_radians(atan2(unit.y, unit.x)).wrapped().to_hours();
        EquatorialCoordinates {
            right_ascension: ra.wrapped(),
            declination: Degrees::from_radians(asin(unit.z.clamp(-1.0, 1.0))),
        }
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        sqrt(self.dot(self))
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Same direction scaled to unit length. A zero vector is returned as is.
    pub fn normalised(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return *self;
        }
        Self::new(self.x / len, self.y / len, self.z / len)
    }

    /// Rotate the vector about the y axis by `angle` (positive tilts +x toward -z).
    pub fn rotate_around_y(&self, angle: Degrees) -> Self {
        let a = angle.to_radians();
        let (s, c) = (sin(a), cos(a));
        Self {
            x: self.x * c + self.z * s,
            y: self.y,
            z: -self.x * s + self.z * c,
        }
    }
}
