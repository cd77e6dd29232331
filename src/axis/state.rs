//! Axis state types.

/// Motion status of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisStatus {
    /// Not moving.
    #[default]
    Stopped,
    /// Continuous rotation until told otherwise.
    Slewing,
    /// Rotating toward a goto target, stopping on arrival.
    SlewingToTarget,
}

/// Sense of rotation on the encoder circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Increasing encoder count.
    #[default]
    Forward,
    /// Decreasing encoder count.
    Reverse,
}

impl Direction {
    /// Get direction from a signed step count. Zero counts as forward.
    #[inline]
    pub fn from_steps(steps: i64) -> Self {
        if steps >= 0 {
            Direction::Forward
        } else {
            Direction::Reverse
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Reverse => -1,
        }
    }
}

/// Identifies one of the two mount axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisId {
    /// Horizontal rotation (RA-like on a polar mount).
    Azimuth,
    /// Vertical rotation (Dec-like on a polar mount).
    Altitude,
}

impl AxisId {
    /// Short name for log lines.
    pub fn name(self) -> &'static str {
        match self {
            AxisId::Azimuth => "az",
            AxisId::Altitude => "alt",
        }
    }
}
