//! Frame module for scope-sim.
//!
//! Coordinate types, sidereal time, the alignment model seam and the
//! bridge converting between the celestial frame and the mount frame.

mod alignment;
mod bridge;
mod coordinates;
pub mod sidereal;
mod vector;

pub use alignment::{
    within_tolerance, AlignmentDatabase, AlignmentModel, NullAlignment, SyncPoint,
    DEFAULT_SYNC_TOLERANCE_PERCENT, MAX_SYNC_POINTS,
};
pub use bridge::{FrameBridge, Resolved, TransformSource};
pub use coordinates::{EquatorialCoordinates, HorizontalCoordinates};
pub use vector::DirectionVector;
