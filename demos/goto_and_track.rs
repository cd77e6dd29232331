//! Example: Goto and sidereal tracking with the tick driver.
//!
//! The delay provider advances a simulated clock instead of sleeping, so the
//! example runs an hour of tracking instantly.
//!
//! Run with: `cargo run --example goto_and_track`

use embedded_hal::delay::DelayNs;

use scope_sim::{
    AxisId, Degrees, EquatorialCoordinates, Hours, ManualClock, Mount, MountGeometry,
    MountState, MoveDirection, NullAlignment, ObserverPosition, TickDriver,
};

/// Delay that moves a simulated clock forward.
struct SimulatedDelay<'a> {
    clock: &'a ManualClock,
}

impl DelayNs for SimulatedDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance(ns as f64 * 1e-9);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Goto and Track Example ===\n");

    // 2024-01-15 21:00 UTC
    let clock = ManualClock::new(1_705_352_400.0);
    let mount = Mount::builder()
        .name("Alt-Az Simulator")
        .alignment(NullAlignment)
        .clock(&clock)
        .observer(ObserverPosition::new(Degrees(48.85), Degrees(2.35)))
        .geometry(MountGeometry::Zenith)
        .build()?;

    let mut driver = TickDriver::new(mount, SimulatedDelay { clock: &clock });

    let betelgeuse = EquatorialCoordinates::new(Hours(5.9195), Degrees(7.4071));
    println!("Goto Betelgeuse (RA 5.9195h, Dec 7.4071°)");
    driver.mount_mut().goto(betelgeuse);

    let mut seconds = 0;
    driver.poll(&mut |_: EquatorialCoordinates| {});
    while driver.mount().state() == MountState::Slewing {
        clock.advance(1.0);
        driver.poll(&mut |_: EquatorialCoordinates| {});
        seconds += 1;
    }
    println!("Tracking after {} s\n", seconds);

    println!("Tracking for one hour, reporting every 10 minutes:");
    println!("{}", "-".repeat(60));
    let mut tracked_secs = 0;
    driver.run(3_600, &mut |pointing: EquatorialCoordinates| {
        tracked_secs += 1;
        if tracked_secs % 600 == 0 {
            println!(
                "  +{:2} min  RA {:.4}h  Dec {:.4}°",
                tracked_secs / 60,
                pointing.right_ascension.value(),
                pointing.declination.value()
            );
        }
    });
    println!("{}", "-".repeat(60));

    let az = driver.mount().axis(AxisId::Azimuth).position();
    let alt = driver.mount().axis(AxisId::Altitude).position();
    println!(
        "Encoders now az {} ({:.2}°), alt {} ({:.2}°)\n",
        az.value(),
        az.to_degrees().value(),
        alt.value(),
        alt.to_degrees().value()
    );

    println!("Nudge north, then repeat the command to stop");
    let mount = driver.mount_mut();
    mount.abort();
    println!("  first press:  {:?}", mount.move_continuous(MoveDirection::North));
    println!("  second press: {:?}", mount.move_continuous(MoveDirection::North));

    Ok(())
}
