//! Mount coordinator: two axes, a frame bridge and the mount-level state.

use heapless::String;

use crate::axis::{
    degrees_to_steps, shortest_signed_delta, AxisController, AxisId, AxisStatus, Direction,
    EncoderPosition,
};
use crate::config::units::Degrees;
use crate::config::{CoordSetMode, MountGeometry, ObserverPosition, SimulatorConfig};
use crate::error::Result;
use crate::frame::{
    AlignmentDatabase, AlignmentModel, DirectionVector, EquatorialCoordinates, FrameBridge,
    SyncPoint, TransformSource,
};

use super::builder::MountBuilder;
use super::clock::Clock;
use super::state::{MountState, MoveDirection, TrackingTarget};

/// A simulated two-axis telescope mount.
///
/// Commands (`goto`, `sync`, `move_continuous`, `abort`) only change target
/// state. Motion happens in [`Mount::tick`], which the caller invokes
/// periodically with the measured elapsed time.
pub struct Mount<A, C>
where
    A: AlignmentModel,
    C: Clock,
{
    name: String<32>,
    azimuth: AxisController,
    altitude: AxisController,
    state: MountState,
    coord_set: CoordSetMode,
    tracking_target: Option<TrackingTarget>,
    bridge: FrameBridge,
    alignment: A,
    database: AlignmentDatabase,
    clock: C,
    /// Goto and manual move rate in steps per second.
    slew_rate: f64,
    tick_interval_ms: u32,
    pointing: EquatorialCoordinates,
}

impl<A, C> Mount<A, C>
where
    A: AlignmentModel,
    C: Clock,
{
    /// Create a mount at encoder zero from an already validated configuration.
    pub(crate) fn from_config(config: &SimulatorConfig, alignment: A, clock: C) -> Self {
        let bridge = FrameBridge::new(config.observer(), config.mount.geometry);
        let mut mount = Self {
            name: config.mount.name.clone(),
            azimuth: AxisController::new(AxisId::Azimuth),
            altitude: AxisController::new(AxisId::Altitude),
            state: MountState::Idle,
            coord_set: config.mount.coord_set,
            tracking_target: None,
            bridge,
            alignment,
            database: AlignmentDatabase::new(config.alignment.sync_tolerance_percent),
            clock,
            slew_rate: degrees_to_steps(Degrees(config.mount.slew_rate.0)) as f64,
            tick_interval_ms: config.mount.tick_interval_ms,
            pointing: EquatorialCoordinates::default(),
        };
        mount.pointing = mount.current_pointing(mount.clock.julian_date());
        mount
    }

    /// Start building a mount.
    pub fn builder() -> MountBuilder<A, C> {
        MountBuilder::new()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Device name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mount-level state.
    #[inline]
    pub fn state(&self) -> MountState {
        self.state
    }

    /// One of the two axes.
    pub fn axis(&self, id: AxisId) -> &AxisController {
        match id {
            AxisId::Azimuth => &self.azimuth,
            AxisId::Altitude => &self.altitude,
        }
    }

    /// Pointing reported by the last tick.
    #[inline]
    pub fn pointing(&self) -> EquatorialCoordinates {
        self.pointing
    }

    /// Target followed while tracking.
    #[inline]
    pub fn tracking_target(&self) -> Option<TrackingTarget> {
        self.tracking_target
    }

    /// Sync points recorded so far.
    #[inline]
    pub fn alignment_database(&self) -> &AlignmentDatabase {
        &self.database
    }

    /// The alignment model.
    #[inline]
    pub fn alignment(&self) -> &A {
        &self.alignment
    }

    /// The time source.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The frame bridge.
    #[inline]
    pub fn bridge(&self) -> &FrameBridge {
        &self.bridge
    }

    /// What a goto does on arrival.
    #[inline]
    pub fn coord_set(&self) -> CoordSetMode {
        self.coord_set
    }

    /// Goto and manual move rate in steps per second.
    #[inline]
    pub fn slew_rate(&self) -> f64 {
        self.slew_rate
    }

    /// Nominal tick interval in milliseconds.
    #[inline]
    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    /// Nominal tick interval in seconds.
    #[inline]
    pub fn tick_interval_secs(&self) -> f64 {
        self.tick_interval_ms as f64 / 1000.0
    }

    /// Change what subsequent gotos do on arrival.
    pub fn set_coord_set(&mut self, mode: CoordSetMode) {
        self.coord_set = mode;
    }

    /// Change (or forget) the observer position.
    pub fn set_observer(&mut self, observer: Option<ObserverPosition>) {
        self.bridge.set_observer(observer);
    }

    /// Change the mount geometry.
    pub fn set_geometry(&mut self, geometry: MountGeometry) {
        self.bridge.set_geometry(geometry);
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Slew both axes to a celestial position.
    ///
    /// In `Track` mode the position also becomes the tracking target, and
    /// tracking starts once both axes arrive.
    pub fn goto(&mut self, coords: EquatorialCoordinates) {
        self.tracking_target = match self.coord_set {
            CoordSetMode::Track => Some(coords),
            CoordSetMode::Slew => None,
        };

        let jd = self.clock.julian_date();
        let resolved = self.bridge.celestial_to_direction(&self.alignment, coords, 0.0, jd);
        let (az_target, alt_target) = FrameBridge::direction_to_encoders(&resolved.value);

        Self::start_goto(&mut self.azimuth, az_target, self.slew_rate);
        Self::start_goto(&mut self.altitude, alt_target, self.slew_rate);
        self.state = MountState::Slewing;

        mount_info!(
            "goto ra {} dec {} -> az {} alt {} via {:?}",
            coords.right_ascension.0,
            coords.declination.0,
            az_target.value(),
            alt_target.value(),
            resolved.source
        );
    }

    /// Record that the mount is currently looking at `coords`.
    ///
    /// Returns the index of the new sync point. The tracking target moves to
    /// `coords`.
    ///
    /// # Errors
    ///
    /// `DuplicateSyncPoint` if the alignment model considers an existing
    /// point equal, `DatabaseFull` if there is no room. Nothing changes in
    /// either case.
    pub fn sync(&mut self, coords: EquatorialCoordinates) -> Result<usize> {
        let point = SyncPoint {
            julian_date: self.clock.julian_date(),
            coordinates: coords,
            direction: self.encoder_direction(),
        };

        let index = self.database.append(&mut self.alignment, point)?;
        self.tracking_target = Some(coords);

        mount_info!(
            "sync #{} ra {} dec {}",
            index,
            coords.right_ascension.0,
            coords.declination.0
        );
        Ok(index)
    }

    /// Operator move command. Repeating the direction of the move in
    /// progress stops the axis. Mount state is unaffected.
    pub fn move_continuous(&mut self, direction: MoveDirection) -> AxisStatus {
        let rate = self.slew_rate;
        self.axis_mut(direction.axis())
            .toggle_slew(direction.direction(), rate)
    }

    /// Stop everything and forget the tracking target.
    pub fn abort(&mut self) {
        self.azimuth.stop();
        self.altitude.stop();
        self.tracking_target = None;
        self.state = MountState::Idle;
        mount_info!("abort");
    }

    /// Advance the simulation by `elapsed_secs` of wall-clock time and return
    /// the pointing the mount now reports.
    ///
    /// Negative or NaN elapsed time counts as zero.
    pub fn tick(&mut self, elapsed_secs: f64) -> EquatorialCoordinates {
        let elapsed = if elapsed_secs > 0.0 { elapsed_secs } else { 0.0 };

        self.azimuth.advance(elapsed);
        self.altitude.advance(elapsed);

        let jd = self.clock.julian_date();
        self.pointing = self.current_pointing(jd);

        match self.state {
            MountState::Idle => {}
            MountState::Slewing => {
                if self.azimuth.is_stopped() && self.altitude.is_stopped() {
                    match (self.coord_set, self.tracking_target) {
                        (CoordSetMode::Track, Some(target)) => {
                            mount_info!("goto complete, tracking");
                            self.state = MountState::Tracking;
                            self.apply_tracking(target, jd);
                        }
                        _ => {
                            mount_info!("goto complete");
                            self.state = MountState::Idle;
                        }
                    }
                }
            }
            MountState::Tracking => match self.tracking_target {
                Some(target) => self.apply_tracking(target, jd),
                None => self.state = MountState::Idle,
            },
        }

        self.pointing
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn axis_mut(&mut self, id: AxisId) -> &mut AxisController {
        match id {
            AxisId::Azimuth => &mut self.azimuth,
            AxisId::Altitude => &mut self.altitude,
        }
    }

    fn encoder_direction(&self) -> DirectionVector {
        FrameBridge::encoders_to_direction(self.azimuth.position(), self.altitude.position())
    }

    fn current_pointing(&self, julian_date: f64) -> EquatorialCoordinates {
        self.bridge
            .direction_to_celestial(&self.alignment, &self.encoder_direction(), julian_date)
            .value
    }

    fn start_goto(axis: &mut AxisController, target: EncoderPosition, rate: f64) {
        let delta = shortest_signed_delta(target, axis.position());
        axis.slew_to(target, Direction::from_steps(delta), rate);
    }

    /// Point both axes at where the target will be one tick from now.
    fn apply_tracking(&mut self, target: TrackingTarget, julian_date: f64) {
        let interval = self.tick_interval_secs();
        let resolved =
            self.bridge.celestial_to_direction(&self.alignment, target, interval, julian_date);

        if resolved.source == TransformSource::Direct {
            mount_info!("no alignment model or observer position, tracking stopped");
            self.azimuth.stop();
            self.altitude.stop();
            self.state = MountState::Idle;
            return;
        }

        let (az_target, alt_target) = FrameBridge::direction_to_encoders(&resolved.value);
        Self::correct(&mut self.azimuth, az_target, interval);
        Self::correct(&mut self.altitude, alt_target, interval);
    }

    fn correct(axis: &mut AxisController, target: EncoderPosition, interval_secs: f64) {
        let offset = shortest_signed_delta(target, axis.position());
        if offset != 0 {
            axis.slew(
                Direction::from_steps(offset),
                offset.unsigned_abs() as f64 / interval_secs,
            );
        } else {
            axis.stop();
        }
        mount_debug!("{} axis tracking offset {}", axis.id().name(), offset);
    }
}
