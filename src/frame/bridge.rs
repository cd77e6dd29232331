//! Frame transform bridge between the celestial frame and the mount frame.
//!
//! Conversions first ask the alignment model. When it declines:
//! - with an observer position, go through horizontal coordinates for the
//!   current time and tilt the result so the mount's polar axis lines up
//!   with the configured pole;
//! - without one, map equatorial angles straight onto the mount axes. That
//!   is only right for an observer at latitude 0, longitude 0.

use crate::axis::EncoderPosition;
use crate::config::units::Degrees;
use crate::config::{MountGeometry, ObserverPosition};

use super::alignment::AlignmentModel;
use super::coordinates::{EquatorialCoordinates, HorizontalCoordinates};
use super::sidereal::{equatorial_to_horizontal, horizontal_to_equatorial, SECONDS_PER_DAY};
use super::vector::DirectionVector;

/// Which path produced a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransformSource {
    /// The alignment model answered.
    Model,
    /// Horizontal coordinates from the observer position and clock.
    Horizontal,
    /// Direct equatorial mapping (no model, no observer).
    Direct,
}

/// A converted value and the path that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<T> {
    /// The converted value.
    pub value: T,
    /// How it was obtained.
    pub source: TransformSource,
}

/// Converts between celestial coordinates and mount directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameBridge {
    observer: Option<ObserverPosition>,
    geometry: MountGeometry,
}

impl FrameBridge {
    /// Create a bridge for an observer (if known) and mount geometry.
    pub fn new(observer: Option<ObserverPosition>, geometry: MountGeometry) -> Self {
        Self { observer, geometry }
    }

    /// The observer position, if known.
    pub fn observer(&self) -> Option<ObserverPosition> {
        self.observer
    }

    /// The mount geometry.
    pub fn geometry(&self) -> MountGeometry {
        self.geometry
    }

    /// Replace the observer position.
    pub fn set_observer(&mut self, observer: Option<ObserverPosition>) {
        self.observer = observer;
    }

    /// Replace the mount geometry.
    pub fn set_geometry(&mut self, geometry: MountGeometry) {
        self.geometry = geometry;
    }

    /// Rotation about y that takes horizontal vectors into the mount frame.
    /// Zero when no observer position is known.
    pub fn polar_tilt(&self) -> Degrees {
        match (self.observer, self.geometry) {
            (None, _) | (Some(_), MountGeometry::Zenith) => Degrees(0.0),
            (Some(site), MountGeometry::NorthCelestialPole) => Degrees(site.latitude.0 - 90.0),
            (Some(site), MountGeometry::SouthCelestialPole) => Degrees(site.latitude.0 + 90.0),
        }
    }

    /// Mount direction for a celestial position `time_offset_secs` after `julian_date`.
    pub fn celestial_to_direction<A: AlignmentModel + ?Sized>(
        &self,
        model: &A,
        coords: EquatorialCoordinates,
        time_offset_secs: f64,
        julian_date: f64,
    ) -> Resolved<DirectionVector> {
        let julian_offset = time_offset_secs / SECONDS_PER_DAY;

        if let Some(value) = model.celestial_to_direction(coords, julian_offset) {
            return Resolved {
                value,
                source: TransformSource::Model,
            };
        }

        match self.observer {
            Some(site) => {
                let horizontal =
                    equatorial_to_horizontal(coords, &site, julian_date + julian_offset);
                Resolved {
                    value: DirectionVector::from_alt_az(horizontal)
                        .rotate_around_y(self.polar_tilt()),
                    source: TransformSource::Horizontal,
                }
            }
            None => Resolved {
                value: DirectionVector::from_equatorial(coords),
                source: TransformSource::Direct,
            },
        }
    }

    /// Celestial position the mount is looking at along `direction` at `julian_date`.
    pub fn direction_to_celestial<A: AlignmentModel + ?Sized>(
        &self,
        model: &A,
        direction: &DirectionVector,
        julian_date: f64,
    ) -> Resolved<EquatorialCoordinates> {
        if let Some(value) = model.direction_to_celestial(direction) {
            return Resolved {
                value,
                source: TransformSource::Model,
            };
        }

        match self.observer {
            Some(site) => {
                let tilt = self.polar_tilt();
                let horizontal = direction.rotate_around_y(Degrees(-tilt.0)).to_alt_az();
                Resolved {
                    value: horizontal_to_equatorial(horizontal, &site, julian_date),
                    source: TransformSource::Horizontal,
                }
            }
            None => Resolved {
                value: direction.to_equatorial(),
                source: TransformSource::Direct,
            },
        }
    }

    /// Encoder positions `(azimuth, altitude)` for a mount direction.
    pub fn direction_to_encoders(
        direction: &DirectionVector,
    ) -> (EncoderPosition, EncoderPosition) {
        let angles = direction.to_alt_az();
        (
            EncoderPosition::from_degrees(angles.azimuth),
            EncoderPosition::from_degrees(angles.altitude),
        )
    }

    /// Mount direction for encoder positions.
    pub fn encoders_to_direction(
        azimuth: EncoderPosition,
        altitude: EncoderPosition,
    ) -> DirectionVector {
        DirectionVector::from_alt_az(HorizontalCoordinates::new(
            altitude.to_degrees(),
            azimuth.to_degrees(),
        ))
    }
}
