//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{MountConfig, ObserverPosition, SimulatorConfig};

/// Validate a simulator configuration.
///
/// Checks:
/// - Slew rate and tick interval are positive
/// - Observer latitude/longitude are in range (if a site is given)
/// - Sync tolerance is positive
pub fn validate_config(config: &SimulatorConfig) -> Result<()> {
    validate_mount(&config.mount)?;

    if let Some(ref site) = config.site {
        validate_site(site)?;
    }

    if !(config.alignment.sync_tolerance_percent > 0.0) {
        return Err(Error::Config(ConfigError::InvalidSyncTolerance(
            config.alignment.sync_tolerance_percent,
        )));
    }

    Ok(())
}

fn validate_mount(config: &MountConfig) -> Result<()> {
    // NaN fails this too
    if !(config.slew_rate.0 > 0.0) {
        return Err(Error::Config(ConfigError::InvalidSlewRate(config.slew_rate.0)));
    }

    if config.tick_interval_ms == 0 {
        return Err(Error::Config(ConfigError::InvalidTickInterval(
            config.tick_interval_ms,
        )));
    }

    Ok(())
}

fn validate_site(site: &ObserverPosition) -> Result<()> {
    if !site.latitude_is_valid() {
        return Err(Error::Config(ConfigError::InvalidLatitude(site.latitude.0)));
    }

    if !site.longitude_is_valid() {
        return Err(Error::Config(ConfigError::InvalidLongitude(site.longitude.0)));
    }

    Ok(())
}
