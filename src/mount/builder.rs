//! Builder pattern for Mount.

use crate::config::units::DegreesPerSec;
use crate::config::{
    validate_config, CoordSetMode, MountGeometry, ObserverPosition, SimulatorConfig,
};
use crate::error::{ConfigError, Error, Result};
use crate::frame::AlignmentModel;

use super::clock::Clock;
use super::coordinator::Mount;

/// Builder for creating Mount instances.
pub struct MountBuilder<A, C>
where
    A: AlignmentModel,
    C: Clock,
{
    alignment: Option<A>,
    clock: Option<C>,
    config: SimulatorConfig,
}

impl<A, C> Default for MountBuilder<A, C>
where
    A: AlignmentModel,
    C: Clock,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A, C> MountBuilder<A, C>
where
    A: AlignmentModel,
    C: Clock,
{
    /// Create a new builder with default settings and no observer position.
    pub fn new() -> Self {
        Self {
            alignment: None,
            clock: None,
            config: SimulatorConfig::default(),
        }
    }

    /// Set the alignment model.
    pub fn alignment(mut self, model: A) -> Self {
        self.alignment = Some(model);
        self
    }

    /// Set the time source.
    pub fn clock(mut self, clock: C) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the device name. Names over 32 bytes leave it empty.
    pub fn name(mut self, name: &str) -> Self {
        self.config.mount.name = heapless::String::try_from(name).unwrap_or_default();
        self
    }

    /// Set the observer position.
    pub fn observer(mut self, observer: ObserverPosition) -> Self {
        self.config.site = Some(observer);
        self
    }

    /// Set the mount geometry.
    pub fn geometry(mut self, geometry: MountGeometry) -> Self {
        self.config.mount.geometry = geometry;
        self
    }

    /// Set the goto and manual move rate.
    pub fn slew_rate(mut self, rate: DegreesPerSec) -> Self {
        self.config.mount.slew_rate = rate;
        self
    }

    /// Set the nominal tick interval in milliseconds.
    pub fn tick_interval_ms(mut self, interval: u32) -> Self {
        self.config.mount.tick_interval_ms = interval;
        self
    }

    /// Set what a goto does on arrival.
    pub fn coord_set(mut self, mode: CoordSetMode) -> Self {
        self.config.mount.coord_set = mode;
        self
    }

    /// Set the duplicate sync point tolerance in percent.
    pub fn sync_tolerance_percent(mut self, tolerance: f64) -> Self {
        self.config.alignment.sync_tolerance_percent = tolerance;
        self
    }

    /// Take every setting from a loaded configuration.
    pub fn from_config(mut self, config: &SimulatorConfig) -> Self {
        self.config = config.clone();
        self
    }

    /// Build the Mount.
    ///
    /// # Errors
    ///
    /// Returns an error if the alignment model or clock is missing, or if the
    /// settings fail validation.
    pub fn build(self) -> Result<Mount<A, C>> {
        validate_config(&self.config)?;

        let alignment = self
            .alignment
            .ok_or(Error::Config(ConfigError::MissingComponent("alignment")))?;
        let clock = self
            .clock
            .ok_or(Error::Config(ConfigError::MissingComponent("clock")))?;

        let mount = Mount::from_config(&self.config, alignment, clock);
        mount_info!(
            "mount {} ready, geometry {:?}",
            mount.name(),
            self.config.mount.geometry
        );
        Ok(mount)
    }
}
