//! Per-axis motion state machine.
//!
//! The mount is inertia free: a rate or direction change takes effect on the
//! very next advance.

use super::position::{EncoderPosition, STEPS_PER_REVOLUTION};
use super::state::{AxisId, AxisStatus, Direction};

/// Snapshot of an axis' motion state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisState {
    /// Current status.
    pub status: AxisStatus,
    /// Commanded direction.
    pub direction: Direction,
    /// Commanded rate in steps per second.
    pub rate: f64,
    /// Goto target, meaningful only while `status == SlewingToTarget`.
    pub target: EncoderPosition,
}

/// Whole steps covered at `rate` steps/s during `elapsed_secs`, unreduced.
#[inline]
pub fn slew_distance(elapsed_secs: f64, rate: f64) -> i64 {
    let raw = libm::floor(elapsed_secs * rate);
    // Negative or NaN time/rate moves nothing
    if !(raw > 0.0) {
        return 0;
    }
    // Saturating float->int cast
    raw as i64
}

/// Whole steps covered at `rate` steps/s during `elapsed_secs`, reduced to
/// less than one revolution.
#[inline]
pub fn slew_steps(elapsed_secs: f64, rate: f64) -> i64 {
    slew_distance(elapsed_secs, rate) % STEPS_PER_REVOLUTION
}

/// Motion controller for one mount axis.
#[derive(Debug, Clone)]
pub struct AxisController {
    /// Which axis this is, for log lines.
    id: AxisId,
    /// Current encoder reading.
    position: EncoderPosition,
    /// Current status.
    status: AxisStatus,
    /// Commanded direction.
    direction: Direction,
    /// Commanded rate in steps per second.
    rate: f64,
    /// Goto target.
    target: EncoderPosition,
    /// Direction of the manual slew in progress, for toggle-off detection.
    manual: Option<Direction>,
}

impl AxisController {
    /// Create a stopped axis at encoder zero.
    pub fn new(id: AxisId) -> Self {
        Self::at(id, EncoderPosition::ZERO)
    }

    /// Create a stopped axis at a given encoder position.
    pub fn at(id: AxisId, position: EncoderPosition) -> Self {
        Self {
            id,
            position,
            status: AxisStatus::Stopped,
            direction: Direction::Forward,
            rate: 0.0,
            target: position,
            manual: None,
        }
    }

    /// Which axis this is.
    #[inline]
    pub fn id(&self) -> AxisId {
        self.id
    }

    /// Current encoder position.
    #[inline]
    pub fn position(&self) -> EncoderPosition {
        self.position
    }

    /// Current status.
    #[inline]
    pub fn status(&self) -> AxisStatus {
        self.status
    }

    /// Commanded direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Commanded rate in steps per second.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Goto target (stale unless slewing to target).
    #[inline]
    pub fn target(&self) -> EncoderPosition {
        self.target
    }

    /// True when the axis is not moving.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.status == AxisStatus::Stopped
    }

    /// Snapshot of the motion state.
    pub fn state(&self) -> AxisState {
        AxisState {
            status: self.status,
            direction: self.direction,
            rate: self.rate,
            target: self.target,
        }
    }

    /// Start continuous rotation.
    pub fn slew(&mut self, direction: Direction, rate: f64) {
        self.status = AxisStatus::Slewing;
        self.direction = direction;
        self.rate = rate.max(0.0);
    }

    /// Operator move command with toggle-off semantics.
    ///
    /// Repeating the direction of the manual slew in progress stops the axis;
    /// any other direction (re)starts a manual slew that way.
    pub fn toggle_slew(&mut self, direction: Direction, rate: f64) -> AxisStatus {
        if self.status == AxisStatus::Slewing && self.manual == Some(direction) {
            self.stop();
        } else {
            self.slew(direction, rate);
            self.manual = Some(direction);
        }
        mount_debug!(
            "{} axis manual move {:?} -> {:?}",
            self.id.name(),
            direction,
            self.status
        );
        self.status
    }

    /// Head for `target` in the given direction, stopping on arrival.
    ///
    /// The direction is honoured even if the target is nominally behind.
    pub fn slew_to(&mut self, target: EncoderPosition, direction: Direction, rate: f64) {
        self.target = target;
        self.manual = None;
        self.slew(direction, rate);
        self.status = AxisStatus::SlewingToTarget;
    }

    /// Stop immediately.
    pub fn stop(&mut self) {
        self.status = AxisStatus::Stopped;
        self.manual = None;
    }

    /// Integrate motion over `elapsed_secs` and return the steps travelled.
    pub fn advance(&mut self, elapsed_secs: f64) -> i64 {
        let distance = slew_distance(elapsed_secs, self.rate);
        let steps = distance % STEPS_PER_REVOLUTION;

        mount_debug!(
            "{} axis encoder {} steps {} target {} status {:?}",
            self.id.name(),
            self.position.value(),
            steps,
            self.target.value(),
            self.status
        );

        let travelled = match self.status {
            AxisStatus::Stopped => 0,
            AxisStatus::Slewing => {
                self.position = self.position.offset(self.direction.sign() * steps);
                steps
            }
            AxisStatus::SlewingToTarget => {
                let steps_to_target = self
                    .position
                    .directional_distance(self.target, self.direction == Direction::Forward);
                // Compare before folding: a long tick can pass the target
                if steps_to_target <= distance {
                    // Arrived this tick
                    self.position = self.target;
                    self.status = AxisStatus::Stopped;
                    steps_to_target
                } else {
                    self.position = self.position.offset(self.direction.sign() * steps);
                    steps
                }
            }
        };

        mount_debug!(
            "{} axis new encoder {} status {:?}",
            self.id.name(),
            self.position.value(),
            self.status
        );

        travelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slew_steps_floor_and_fold() {
        assert_eq!(slew_steps(0.5, 3.0), 1);
        assert_eq!(slew_steps(2.5, 1_000_000.0), 500_000);
        assert_eq!(slew_steps(-1.0, 100.0), 0);
        assert_eq!(slew_steps(f64::NAN, 100.0), 0);
        assert_eq!(slew_distance(2.5, 1_000_000.0), 2_500_000);
    }

    #[test]
    fn test_goto_arrives_within_one_long_tick() {
        let mut axis = AxisController::new(AxisId::Azimuth);
        axis.slew_to(EncoderPosition::new(300_000), Direction::Forward, 5_556.0);

        // 1,111,200 steps, more than a full revolution
        let travelled = axis.advance(200.0);

        assert_eq!(travelled, 300_000);
        assert_eq!(axis.position().value(), 300_000);
        assert_eq!(axis.status(), AxisStatus::Stopped);
    }

    #[test]
    fn test_goto_half_revolution_snaps() {
        let mut axis = AxisController::new(AxisId::Azimuth);
        axis.slew_to(EncoderPosition::new(500_000), Direction::Forward, 1_000_000.0);

        axis.advance(0.5);

        assert_eq!(axis.position().value(), 500_000);
        assert_eq!(axis.status(), AxisStatus::Stopped);
    }

    #[test]
    fn test_goto_wraps_without_overshoot() {
        let mut axis = AxisController::at(AxisId::Altitude, EncoderPosition::new(999_900));
        axis.slew_to(EncoderPosition::new(100), Direction::Forward, 1_000.0);

        let travelled = axis.advance(1.0);

        assert_eq!(axis.position().value(), 100);
        assert_eq!(axis.status(), AxisStatus::Stopped);
        assert_eq!(travelled, 200);
    }

    #[test]
    fn test_goto_honours_long_way_round() {
        let mut axis = AxisController::at(AxisId::Azimuth, EncoderPosition::new(1_000));
        // Target is 500 steps behind but we were told to go forward
        axis.slew_to(EncoderPosition::new(500), Direction::Forward, 1_000.0);

        axis.advance(1.0);

        assert_eq!(axis.position().value(), 2_000);
        assert_eq!(axis.status(), AxisStatus::SlewingToTarget);
    }

    #[test]
    fn test_goto_partial_progress() {
        let mut axis = AxisController::new(AxisId::Azimuth);
        axis.slew_to(EncoderPosition::new(10_000), Direction::Reverse, 4_000.0);

        axis.advance(1.0);

        assert_eq!(axis.position().value(), 996_000);
        assert_eq!(axis.status(), AxisStatus::SlewingToTarget);
    }

    #[test]
    fn test_toggle_same_direction_stops() {
        let mut axis = AxisController::new(AxisId::Altitude);

        assert_eq!(axis.toggle_slew(Direction::Forward, 100.0), AxisStatus::Slewing);
        assert_eq!(axis.toggle_slew(Direction::Forward, 100.0), AxisStatus::Stopped);
    }

    #[test]
    fn test_toggle_other_direction_reverses() {
        let mut axis = AxisController::new(AxisId::Altitude);

        axis.toggle_slew(Direction::Forward, 100.0);
        assert_eq!(axis.toggle_slew(Direction::Reverse, 100.0), AxisStatus::Slewing);
        assert_eq!(axis.direction(), Direction::Reverse);

        axis.advance(2.0);
        assert_eq!(axis.position().value(), 999_800);
    }

    #[test]
    fn test_stopped_axis_does_not_move() {
        let mut axis = AxisController::at(AxisId::Azimuth, EncoderPosition::new(42));
        assert_eq!(axis.advance(10.0), 0);
        assert_eq!(axis.position().value(), 42);
    }
}
