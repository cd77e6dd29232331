//! Alignment model seam and the sync point database.
//!
//! The alignment model is an opaque transform between the celestial frame
//! and the mount frame, built from sync points. It may decline any request,
//! in which case the frame bridge falls back to geometry.

use heapless::Vec;

use crate::error::{AlignmentError, Error, Result};

use super::coordinates::EquatorialCoordinates;
use super::vector::DirectionVector;

/// Maximum number of sync points the database holds.
pub const MAX_SYNC_POINTS: usize = 64;

/// Default duplicate tolerance, in percent of the coordinate range.
pub const DEFAULT_SYNC_TOLERANCE_PERCENT: f64 = 0.1;

/// A calibration correspondence between the sky and the mount.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SyncPoint {
    /// When the observation was made.
    pub julian_date: f64,
    /// Where the sky says the mount is pointing.
    pub coordinates: EquatorialCoordinates,
    /// Where the encoders say the mount is pointing.
    pub direction: DirectionVector,
}

/// Default equality policy: right ascension within `24 * tol / 100` hours
/// and declination within `180 * tol / 100` degrees.
pub fn within_tolerance(
    existing: &SyncPoint,
    candidate: &SyncPoint,
    tolerance_percent: f64,
) -> bool {
    let (old, new) = (&existing.coordinates, &candidate.coordinates);
    let ra_diff = libm::fabs(old.right_ascension.0 - new.right_ascension.0);
    let dec_diff = libm::fabs(old.declination.0 - new.declination.0);
    ra_diff < 24.0 * tolerance_percent / 100.0 && dec_diff < 180.0 * tolerance_percent / 100.0
}

/// Transform between celestial coordinates and mount directions.
pub trait AlignmentModel {
    /// Mount direction for a celestial position `julian_offset` days from now,
    /// or `None` if the model can't say.
    fn celestial_to_direction(
        &self,
        coords: EquatorialCoordinates,
        julian_offset: f64,
    ) -> Option<DirectionVector>;

    /// Celestial position for a mount direction, or `None` if the model can't say.
    fn direction_to_celestial(&self, direction: &DirectionVector) -> Option<EquatorialCoordinates>;

    /// Rebuild the model after the sync point set changed.
    fn initialise(&mut self, points: &[SyncPoint]) {
        let _ = points;
    }

    /// Whether `candidate` duplicates `existing`.
    fn is_duplicate(
        &self,
        existing: &SyncPoint,
        candidate: &SyncPoint,
        tolerance_percent: f64,
    ) -> bool {
        within_tolerance(existing, candidate, tolerance_percent)
    }
}

impl<T: AlignmentModel + ?Sized> AlignmentModel for &mut T {
    fn celestial_to_direction(
        &self,
        coords: EquatorialCoordinates,
        julian_offset: f64,
    ) -> Option<DirectionVector> {
        (**self).celestial_to_direction(coords, julian_offset)
    }

    fn direction_to_celestial(&self, direction: &DirectionVector) -> Option<EquatorialCoordinates> {
        (**self).direction_to_celestial(direction)
    }

    fn initialise(&mut self, points: &[SyncPoint]) {
        (**self).initialise(points)
    }

    fn is_duplicate(
        &self,
        existing: &SyncPoint,
        candidate: &SyncPoint,
        tolerance_percent: f64,
    ) -> bool {
        (**self).is_duplicate(existing, candidate, tolerance_percent)
    }
}

/// A model with no knowledge: declines every transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAlignment;

impl AlignmentModel for NullAlignment {
    fn celestial_to_direction(&self, _: EquatorialCoordinates, _: f64) -> Option<DirectionVector> {
        None
    }

    fn direction_to_celestial(&self, _: &DirectionVector) -> Option<EquatorialCoordinates> {
        None
    }
}

/// Append-only store of sync points.
#[derive(Debug, Clone)]
pub struct AlignmentDatabase {
    points: Vec<SyncPoint, MAX_SYNC_POINTS>,
    tolerance_percent: f64,
}

impl Default for AlignmentDatabase {
    fn default() -> Self {
        Self::new(DEFAULT_SYNC_TOLERANCE_PERCENT)
    }
}

impl AlignmentDatabase {
    /// Create an empty database with the given duplicate tolerance.
    pub fn new(tolerance_percent: f64) -> Self {
        Self {
            points: Vec::new(),
            tolerance_percent,
        }
    }

    /// All stored points, oldest first.
    pub fn points(&self) -> &[SyncPoint] {
        &self.points
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if nothing has been synced yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Duplicate tolerance in percent.
    pub fn tolerance_percent(&self) -> f64 {
        self.tolerance_percent
    }

    /// Index of the first stored point the model considers equal to `candidate`.
    pub fn find_duplicate<A: AlignmentModel + ?Sized>(
        &self,
        model: &A,
        candidate: &SyncPoint,
    ) -> Option<usize> {
        self.points
            .iter()
            .position(|existing| model.is_duplicate(existing, candidate, self.tolerance_percent))
    }

    /// Store `candidate` unless it duplicates a stored point, then tell the
    /// model to reinitialise. Returns the new point's index.
    ///
    /// # Errors
    ///
    /// `DuplicateSyncPoint` or `DatabaseFull`; the database is unchanged.
    pub fn append<A: AlignmentModel + ?Sized>(
        &mut self,
        model: &mut A,
        candidate: SyncPoint,
    ) -> Result<usize> {
        if let Some(index) = self.find_duplicate(model, &candidate) {
            return Err(Error::Alignment(AlignmentError::DuplicateSyncPoint { index }));
        }

        self.points
            .push(candidate)
            .map_err(|_| Error::Alignment(AlignmentError::DatabaseFull))?;

        model.initialise(&self.points);
        Ok(self.points.len() - 1)
    }
}
