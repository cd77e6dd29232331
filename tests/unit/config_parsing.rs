//! Unit tests for TOML configuration parsing.

use scope_sim::config::{load_config, parse_config, CoordSetMode, MountGeometry, SimulatorConfig};
use scope_sim::error::{ConfigError, Error};

/// Test parsing a complete configuration.
#[test]
fn test_parse_full_config() {
    let toml_str = r#"
[mount]
name = "Southern Wedge"
geometry = "south_celestial_pole"
slew_rate_deg_per_sec = 3.0
tick_interval_ms = 250
coord_set = "slew"

[site]
latitude = -33.9
longitude = 18.4

[alignment]
sync_tolerance_percent = 0.5
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.mount.name.as_str(), "Southern Wedge");
    assert_eq!(config.mount.geometry, MountGeometry::SouthCelestialPole);
    assert_eq!(config.mount.slew_rate.0, 3.0);
    assert_eq!(config.mount.tick_interval_ms, 250);
    assert_eq!(config.mount.coord_set, CoordSetMode::Slew);
    assert!((config.mount.tick_interval_secs() - 0.25).abs() < 1e-12);

    let site = config.observer().expect("Site not found");
    assert_eq!(site.latitude.0, -33.9);
    assert_eq!(site.longitude.0, 18.4);
    assert_eq!(config.alignment.sync_tolerance_percent, 0.5);
}

/// Test that every section falls back to defaults.
#[test]
fn test_defaults_fill_missing_sections() {
    let config: SimulatorConfig =
        toml::from_str("[mount]\nname = \"Tiny\"\n").expect("Failed to parse TOML");

    assert_eq!(config.mount.name.as_str(), "Tiny");
    assert_eq!(config.mount.geometry, MountGeometry::Zenith);
    assert_eq!(config.mount.slew_rate.0, 2.0);
    assert_eq!(config.mount.tick_interval_ms, 1000);
    assert_eq!(config.mount.coord_set, CoordSetMode::Track);
    assert!(config.site.is_none());
    assert_eq!(config.alignment.sync_tolerance_percent, 0.1);
}

/// Test that a site needs both coordinates.
#[test]
fn test_site_requires_longitude() {
    let toml_str = r#"
[site]
latitude = 10.0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that an over-long name is a parse error rather than a panic.
#[test]
fn test_name_too_long() {
    let toml_str = r#"
[mount]
name = "A name that is far longer than thirty-two bytes"
"#;

    assert!(parse_config(toml_str).is_err());
}

/// Test loading from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join("scope_sim_load_config_test.toml");
    std::fs::write(&path, "[mount]\ngeometry = \"north_celestial_pole\"\n")
        .expect("write temp file");

    let config = load_config(&path).expect("Failed to load config");
    assert_eq!(config.mount.geometry, MountGeometry::NorthCelestialPole);

    let _ = std::fs::remove_file(&path);
}

/// Test that a missing file reports an I/O error.
#[test]
fn test_load_missing_file() {
    let result = load_config("/nonexistent/scope-sim/mount.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
