//! Example: Configuration-driven mount.
//!
//! This example demonstrates how to:
//! - Load mount, site and alignment settings from TOML
//! - Build a Mount from the configuration
//! - Sync, then goto a target and watch the reported pointing
//!
//! Run with: `cargo run --example config_driven --features std`

use scope_sim::{
    error::Result, AxisId, Degrees, EquatorialCoordinates, Hours, ManualClock, Mount,
    MountState, NullAlignment,
};

fn main() -> Result<()> {
    println!("=== Configuration-Driven Mount Example ===\n");

    let toml_content = r#"
[mount]
name = "Observatory Fork"
geometry = "north_celestial_pole"
slew_rate_deg_per_sec = 5.0
tick_interval_ms = 1000
coord_set = "slew"

# Without a site the mount maps equatorial angles straight onto its axes
[site]
latitude = 51.48
longitude = 0.0

[alignment]
sync_tolerance_percent = 0.1
"#;

    let config = scope_sim::parse_config(toml_content)?;

    println!("Mount Configuration:");
    println!("  Name: {}", config.mount.name);
    println!("  Geometry: {:?}", config.mount.geometry);
    println!("  Slew rate: {} °/s", config.mount.slew_rate.value());
    println!("  Tick interval: {} ms", config.mount.tick_interval_ms);
    println!("  On arrival: {:?}", config.mount.coord_set);
    if let Some(site) = config.observer() {
        println!(
            "  Site: lat {:.2}°, lon {:.2}°",
            site.latitude.value(),
            site.longitude.value()
        );
    }
    println!();

    // 2024-06-21 00:00 UTC
    let clock = ManualClock::new(1_718_928_000.0);
    let mut mount = Mount::builder()
        .from_config(&config)
        .alignment(NullAlignment)
        .clock(&clock)
        .build()?;

    let home = mount.pointing();
    println!(
        "Encoders at zero read RA {:.4}h Dec {:.4}°",
        home.right_ascension.value(),
        home.declination.value()
    );

    match mount.sync(home) {
        Ok(index) => println!("Sync point #{} recorded", index),
        Err(e) => println!("Sync failed: {}", e),
    }
    match mount.sync(home) {
        Ok(index) => println!("Sync point #{} recorded", index),
        Err(e) => println!("Second sync rejected: {}", e),
    }
    println!();

    let vega = EquatorialCoordinates::new(Hours(18.6156), Degrees(38.7837));
    println!("Goto Vega");
    println!("{}", "-".repeat(60));
    mount.goto(vega);

    let mut seconds = 0;
    while mount.state() != MountState::Idle && seconds < 120 {
        clock.advance(1.0);
        let pointing = mount.tick(1.0);
        seconds += 1;
        if seconds % 10 == 0 {
            println!(
                "  t={:3}s  az {:7}  alt {:7}  RA {:8.4}h  Dec {:8.4}°",
                seconds,
                mount.axis(AxisId::Azimuth).position().value(),
                mount.axis(AxisId::Altitude).position().value(),
                pointing.right_ascension.value(),
                pointing.declination.value()
            );
        }
    }

    let pointing = mount.pointing();
    println!("{}", "-".repeat(60));
    println!(
        "Arrived after {} s at RA {:.4}h Dec {:.4}°",
        seconds,
        pointing.right_ascension.value(),
        pointing.declination.value()
    );

    Ok(())
}
