//! Unit types for physical quantities.
//!
//! Keeps hours of right ascension, degrees of arc and angular rates apart
//! so a value in one unit can't be fed where another is expected.

use core::ops::{Add, Sub};

use serde::Deserialize;

/// Angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to radians.
    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Create from radians.
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self(radians.to_degrees())
    }

    /// Convert to hours of arc (15 degrees per hour).
    #[inline]
    pub fn to_hours(self) -> Hours {
        Hours(self.0 * 24.0 / 360.0)
    }

    /// Wrap into `[0, 360)`.
    #[inline]
    pub fn wrapped(self) -> Self {
        let mut wrapped = libm::fmod(self.0, 360.0);
        if wrapped < 0.0 {
            wrapped += 360.0;
        }
        // A tiny negative input rounds up to exactly 360 above
        if wrapped >= 360.0 {
            wrapped = 0.0;
        }
        Self(wrapped)
    }
}

impl Add for Degrees {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Right ascension in hours.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Hours(pub f64);

impl Hours {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to degrees of arc.
    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0 * 360.0 / 24.0)
    }

    /// Wrap into `[0, 24)`.
    #[inline]
    pub fn wrapped(self) -> Self {
        self.to_degrees().wrapped().to_hours()
    }
}

/// Angular velocity in degrees per second.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct DegreesPerSec(pub f64);

impl DegreesPerSec {
    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}
