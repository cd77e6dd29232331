//! Integration tests for scope-sim.
//!
//! These tests drive the public API from configuration through goto, sync,
//! manual moves and tracking.

use embedded_hal_mock::eh1::delay::NoopDelay;
use proptest::prelude::*;

use scope_sim::axis::{normalize, shortest_signed_delta, STEPS_PER_REVOLUTION};
use scope_sim::{
    AlignmentModel, AxisController, AxisId, AxisStatus, CoordSetMode, Degrees, Direction,
    DirectionVector, EncoderPosition, EquatorialCoordinates, FrameBridge, Hours, ManualClock,
    Mount, MountGeometry, MountState, MoveDirection, NullAlignment, ObserverPosition,
    TickDriver, TransformSource,
};

// =============================================================================
// Test fixtures
// =============================================================================

const JD: f64 = 2_460_600.25;

const SITE_CONFIG: &str = r#"
[mount]
name = "Backyard Dob"
geometry = "zenith"
slew_rate_deg_per_sec = 4.0
tick_interval_ms = 1000
coord_set = "track"

[site]
latitude = 52.0
longitude = 4.5

[alignment]
sync_tolerance_percent = 0.1
"#;

fn site() -> ObserverPosition {
    ObserverPosition::new(Degrees(52.0), Degrees(4.5))
}

fn site_mount() -> Mount<NullAlignment, ManualClock> {
    Mount::builder()
        .alignment(NullAlignment)
        .clock(ManualClock::at_julian_date(JD))
        .observer(site())
        .build()
        .expect("valid mount")
}

fn both_stopped<A: AlignmentModel, C: scope_sim::Clock>(mount: &Mount<A, C>) -> bool {
    mount.axis(AxisId::Azimuth).is_stopped() && mount.axis(AxisId::Altitude).is_stopped()
}

/// Answers every forward transform with due east on the horizon.
struct EastModel;

impl AlignmentModel for EastModel {
    fn celestial_to_direction(&self, _: EquatorialCoordinates, _: f64) -> Option<DirectionVector> {
        Some(DirectionVector::new(0.0, -1.0, 0.0))
    }

    fn direction_to_celestial(&self, _: &DirectionVector) -> Option<EquatorialCoordinates> {
        None
    }
}

// =============================================================================
// Encoder space laws
// =============================================================================

proptest! {
    #[test]
    fn normalize_stays_in_range(
        p in 0..STEPS_PER_REVOLUTION,
        d in -10 * STEPS_PER_REVOLUTION..10 * STEPS_PER_REVOLUTION,
    ) {
        let v = normalize(p + d).value();
        prop_assert!((0..STEPS_PER_REVOLUTION).contains(&v));
    }

    #[test]
    fn shortest_delta_is_bounded(t in 0..STEPS_PER_REVOLUTION, c in 0..STEPS_PER_REVOLUTION) {
        let delta = shortest_signed_delta(EncoderPosition::new(t), EncoderPosition::new(c));
        prop_assert!(delta.abs() <= STEPS_PER_REVOLUTION / 2);
        prop_assert_eq!(EncoderPosition::new(c).offset(delta).value(), t);
    }
}

// =============================================================================
// Axis scenarios
// =============================================================================

#[test]
fn half_revolution_goto_arrives_exactly() {
    let mut axis = AxisController::new(AxisId::Azimuth);
    axis.slew_to(EncoderPosition::new(500_000), Direction::Forward, 1_000_000.0);

    let travelled = axis.advance(0.5);

    assert_eq!(travelled, 500_000);
    assert_eq!(axis.position().value(), 500_000);
    assert_eq!(axis.status(), AxisStatus::Stopped);
}

#[test]
fn goto_across_zero_does_not_overshoot() {
    let mut axis = AxisController::at(AxisId::Altitude, EncoderPosition::new(999_900));
    axis.slew_to(EncoderPosition::new(100), Direction::Forward, 1_000.0);

    axis.advance(1.0);

    assert_eq!(axis.position().value(), 100);
    assert_eq!(axis.status(), AxisStatus::Stopped);
}

// =============================================================================
// Frame round trip
// =============================================================================

fn round_trip(geometry: MountGeometry, lat: f64, lon: f64, ra: f64, dec: f64) -> (f64, f64) {
    let observer = ObserverPosition::new(Degrees(lat), Degrees(lon));
    let bridge = FrameBridge::new(Some(observer), geometry);
    let coords = EquatorialCoordinates::new(Hours(ra), Degrees(dec));

    let direction = bridge.celestial_to_direction(&NullAlignment, coords, 0.0, JD);
    assert_eq!(direction.source, TransformSource::Horizontal);
    let back = bridge.direction_to_celestial(&NullAlignment, &direction.value, JD).value;

    let mut ra_error = (back.right_ascension.0 - ra) * 15.0;
    if ra_error > 180.0 {
        ra_error -= 360.0;
    } else if ra_error < -180.0 {
        ra_error += 360.0;
    }
    (ra_error.abs(), (back.declination.0 - dec).abs())
}

proptest! {
    #[test]
    fn zenith_round_trip(
        lat in -80.0..80.0f64,
        lon in -180.0..180.0f64,
        ra in 0.0..24.0f64,
        dec in -85.0..85.0f64,
    ) {
        let (ra_err, dec_err) = round_trip(MountGeometry::Zenith, lat, lon, ra, dec);
        prop_assert!(ra_err < 1e-6 && dec_err < 1e-6, "ra {} dec {}", ra_err, dec_err);
    }

    #[test]
    fn north_pole_round_trip(
        lat in -80.0..80.0f64,
        lon in -180.0..180.0f64,
        ra in 0.0..24.0f64,
        dec in -85.0..85.0f64,
    ) {
        let (ra_err, dec_err) = round_trip(MountGeometry::NorthCelestialPole, lat, lon, ra, dec);
        prop_assert!(ra_err < 1e-6 && dec_err < 1e-6, "ra {} dec {}", ra_err, dec_err);
    }

    #[test]
    fn south_pole_round_trip(
        lat in -80.0..80.0f64,
        lon in -180.0..180.0f64,
        ra in 0.0..24.0f64,
        dec in -85.0..85.0f64,
    ) {
        let (ra_err, dec_err) = round_trip(MountGeometry::SouthCelestialPole, lat, lon, ra, dec);
        prop_assert!(ra_err < 1e-6 && dec_err < 1e-6, "ra {} dec {}", ra_err, dec_err);
    }
}

// =============================================================================
// Mount behaviour
// =============================================================================

#[test]
fn tracking_settles_until_time_moves() {
    let mut mount = site_mount();
    mount.goto(EquatorialCoordinates::new(Hours(20.7), Degrees(45.3)));

    mount.tick(100.0);
    assert_eq!(mount.state(), MountState::Tracking);
    mount.tick(1.0);

    for _ in 0..5 {
        mount.tick(1.0);
        assert!(both_stopped(&mount));
    }

    mount.clock().advance(120.0);
    mount.tick(1.0);
    assert_eq!(mount.state(), MountState::Tracking);
    assert!(!both_stopped(&mount));
}

#[test]
fn tracking_follows_the_sky() {
    let mut mount = site_mount();
    let target = EquatorialCoordinates::new(Hours(20.7), Degrees(45.3));
    mount.goto(target);
    mount.tick(100.0);

    // Ten minutes of one-second ticks with the clock running
    for _ in 0..600 {
        mount.clock().advance(1.0);
        mount.tick(1.0);
    }

    let pointing = mount.pointing();
    assert_eq!(mount.state(), MountState::Tracking);
    assert!((pointing.right_ascension.0 - 20.7).abs() < 1e-3);
    assert!((pointing.declination.0 - 45.3).abs() < 1e-2);
}

#[test]
fn abort_twice_equals_abort_once() {
    let mut mount = site_mount();
    mount.goto(EquatorialCoordinates::new(Hours(1.0), Degrees(60.0)));
    mount.move_continuous(MoveDirection::East);
    mount.tick(0.5);

    mount.abort();
    let snapshot = |m: &Mount<NullAlignment, ManualClock>| {
        (m.state(), m.axis(AxisId::Azimuth).state(), m.axis(AxisId::Altitude).state())
    };
    let once = snapshot(&mount);
    mount.abort();
    let twice = snapshot(&mount);

    assert_eq!(once, twice);
    assert_eq!(mount.state(), MountState::Idle);
    assert!(both_stopped(&mount));
}

#[test]
fn repeated_north_stops_altitude_axis() {
    let mut mount = site_mount();

    mount.move_continuous(MoveDirection::North);
    mount.tick(1.0);
    mount.move_continuous(MoveDirection::North);

    assert_eq!(mount.axis(AxisId::Altitude).status(), AxisStatus::Stopped);
    assert_eq!(mount.state(), MountState::Idle);
}

#[test]
fn model_answer_keeps_tracking_without_observer() {
    let mut mount = Mount::builder()
        .alignment(EastModel)
        .clock(ManualClock::at_julian_date(JD))
        .build()
        .expect("valid mount");

    mount.goto(EquatorialCoordinates::new(Hours(9.0), Degrees(-5.0)));
    mount.tick(100.0);

    assert_eq!(mount.axis(AxisId::Azimuth).position().value(), 250_000);
    assert_eq!(mount.axis(AxisId::Altitude).position().value(), 0);
    assert_eq!(mount.state(), MountState::Tracking);

    mount.tick(1.0);
    assert_eq!(mount.state(), MountState::Tracking);
    assert!(both_stopped(&mount));
}

#[test]
fn slew_mode_goto_ends_idle() {
    let mut mount = site_mount();
    mount.set_coord_set(CoordSetMode::Slew);

    mount.goto(EquatorialCoordinates::new(Hours(4.6), Degrees(16.5)));
    mount.tick(100.0);

    assert_eq!(mount.state(), MountState::Idle);
    assert!(mount.tracking_target().is_none());
}

#[test]
fn sync_records_points_and_rejects_duplicates() {
    let mut mount = site_mount();

    assert_eq!(mount.sync(EquatorialCoordinates::new(Hours(2.0), Degrees(89.0))), Ok(0));
    mount.move_continuous(MoveDirection::West);
    mount.tick(10.0);
    assert_eq!(mount.sync(EquatorialCoordinates::new(Hours(6.0), Degrees(10.0))), Ok(1));

    assert!(mount.sync(EquatorialCoordinates::new(Hours(2.0), Degrees(89.0))).is_err());
    assert_eq!(mount.alignment_database().len(), 2);
}

// =============================================================================
// Configuration to running mount
// =============================================================================

#[test]
fn config_driven_mount() {
    let config = scope_sim::parse_config(SITE_CONFIG).expect("valid config");

    let mount = Mount::builder()
        .from_config(&config)
        .alignment(NullAlignment)
        .clock(ManualClock::at_julian_date(JD))
        .build()
        .expect("valid mount");

    assert_eq!(mount.name(), "Backyard Dob");
    assert_eq!(mount.bridge().observer(), Some(site()));
    // 4 deg/s
    assert_eq!(mount.slew_rate(), 11_111.0);
}

#[test]
fn tick_driver_runs_goto_to_completion() {
    let clock = ManualClock::at_julian_date(JD);
    let mount = Mount::builder()
        .alignment(NullAlignment)
        .clock(&clock)
        .observer(site())
        .coord_set(CoordSetMode::Slew)
        .build()
        .expect("valid mount");
    let mut driver = TickDriver::new(mount, NoopDelay::new());

    driver.mount_mut().goto(EquatorialCoordinates::new(Hours(13.4), Degrees(-11.2)));

    let mut reports = 0;
    let mut sink = |_: EquatorialCoordinates| reports += 1;
    for _ in 0..100 {
        driver.poll(&mut sink);
        clock.advance(1.0);
    }

    assert_eq!(reports, 100);
    assert_eq!(driver.mount().state(), MountState::Idle);
}
