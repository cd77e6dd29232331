//! Encoder space: circular step positions with wraparound arithmetic.

use crate::config::units::Degrees;

/// Encoder steps in one full axis revolution.
pub const STEPS_PER_REVOLUTION: i64 = 1_000_000;

/// Encoder steps per degree of axis rotation.
pub const STEPS_PER_DEGREE: f64 = STEPS_PER_REVOLUTION as f64 / 360.0;

const HALF_REVOLUTION: i64 = STEPS_PER_REVOLUTION / 2;

/// Position of one axis on its encoder circle.
///
/// Always held in `[0, STEPS_PER_REVOLUTION)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderPosition(i64);

impl EncoderPosition {
    /// The zero position.
    pub const ZERO: Self = Self(0);

    /// Create a position from a value that is expected to be in range already.
    ///
    /// Out of range values are a caller bug: they trip a debug assertion and
    /// are normalized in release builds.
    #[inline]
    pub fn new(steps: i64) -> Self {
        debug_assert!(
            (0..STEPS_PER_REVOLUTION).contains(&steps),
            "encoder position {} out of range",
            steps
        );
        normalize(steps)
    }

    /// Get the raw step value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Position after moving `delta` steps, wrapping around the circle.
    #[inline]
    pub fn offset(self, delta: i64) -> Self {
        normalize(self.0 + delta)
    }

    /// Convert to degrees in `[0, 360)`.
    #[inline]
    pub fn to_degrees(self) -> Degrees {
        steps_to_degrees(self.0)
    }

    /// Nearest encoder position to an angle (any value, wrapped onto the circle).
    #[inline]
    pub fn from_degrees(degrees: Degrees) -> Self {
        normalize(degrees_to_steps(degrees))
    }

    /// Steps from `self` to `target` travelling only in the given sense.
    ///
    /// `forward == true` counts upward through the wrap point, `false`
    /// counts downward.
    #[inline]
    pub fn directional_distance(self, target: Self, forward: bool) -> i64 {
        if forward {
            normalize(target.0 - self.0).0
        } else {
            normalize(self.0 - target.0).0
        }
    }
}

/// Reduce any integer onto the encoder circle.
#[inline]
pub fn normalize(raw: i64) -> EncoderPosition {
    // rem_euclid is non-negative for a positive modulus
    EncoderPosition(raw.rem_euclid(STEPS_PER_REVOLUTION))
}

/// Signed step delta from `current` to `target` along the shorter arc.
///
/// The magnitude never exceeds half a revolution.
#[inline]
pub fn shortest_signed_delta(target: EncoderPosition, current: EncoderPosition) -> i64 {
    let delta = target.0 - current.0;
    if delta > HALF_REVOLUTION {
        delta - STEPS_PER_REVOLUTION
    } else if delta < -HALF_REVOLUTION {
        delta + STEPS_PER_REVOLUTION
    } else {
        delta
    }
}

/// Convert an angle to encoder steps (unwrapped, rounded to nearest).
#[inline]
pub fn degrees_to_steps(degrees: Degrees) -> i64 {
    libm::round(degrees.0 * STEPS_PER_DEGREE) as i64
}

/// Convert encoder steps to an angle.
#[inline]
pub fn steps_to_degrees(steps: i64) -> Degrees {
    Degrees(steps as f64 / STEPS_PER_DEGREE)
}
