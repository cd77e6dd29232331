//! Unit tests for configuration validation.

use scope_sim::config::units::{Degrees, DegreesPerSec};
use scope_sim::config::{parse_config, validate_config, ObserverPosition, SimulatorConfig};
use scope_sim::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let config = SimulatorConfig {
        site: Some(ObserverPosition::new(Degrees(-90.0), Degrees(359.9))),
        ..SimulatorConfig::default()
    };

    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a non-positive slew rate.
#[test]
fn test_negative_slew_rate() {
    let mut config = SimulatorConfig::default();
    config.mount.slew_rate = DegreesPerSec(-1.0);

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidSlewRate(_)))
    ));
}

/// Test validation fails for a zero tick interval.
#[test]
fn test_zero_tick_interval() {
    let toml_str = r#"
[mount]
tick_interval_ms = 0
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::InvalidTickInterval(0)))
    ));
}

/// Test validation of observer longitude.
#[test]
fn test_longitude_out_of_range() {
    let config = SimulatorConfig {
        site: Some(ObserverPosition::new(Degrees(10.0), Degrees(-200.0))),
        ..SimulatorConfig::default()
    };

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidLongitude(_)))
    ));
}

/// Test validation of the duplicate sync tolerance.
#[test]
fn test_zero_sync_tolerance() {
    let toml_str = r#"
[alignment]
sync_tolerance_percent = 0.0
"#;

    let err = parse_config(toml_str).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::InvalidSyncTolerance(_))));
    assert_eq!(
        format!("{}", err),
        "Configuration error: Invalid sync tolerance: 0%. Must be > 0"
    );
}
