//! Mount-level state types.

use crate::axis::{AxisId, Direction};
use crate::frame::EquatorialCoordinates;

/// What the mount as a whole is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MountState {
    /// Not moving on its own.
    #[default]
    Idle,
    /// Executing a goto.
    Slewing,
    /// Following a celestial target.
    Tracking,
}

/// Celestial position the mount follows while tracking.
pub type TrackingTarget = EquatorialCoordinates;

/// Operator motion command, named by the compass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveDirection {
    /// Altitude axis forward.
    North,
    /// Altitude axis reverse.
    South,
    /// Azimuth axis forward.
    West,
    /// Azimuth axis reverse.
    East,
}

impl MoveDirection {
    /// Axis this command drives.
    pub fn axis(self) -> AxisId {
        match self {
            MoveDirection::North | MoveDirection::South => AxisId::Altitude,
            MoveDirection::West | MoveDirection::East => AxisId::Azimuth,
        }
    }

    /// Encoder direction this command drives its axis in.
    pub fn direction(self) -> Direction {
        match self {
            MoveDirection::North | MoveDirection::West => Direction::Forward,
            MoveDirection::South | MoveDirection::East => Direction::Reverse,
        }
    }
}
