//! Mount configuration from TOML.

use heapless::String;
use serde::Deserialize;

use super::units::DegreesPerSec;

/// Which axis of the mount's native frame is treated as the polar axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum MountGeometry {
    /// Alt-az mount, primary axis pointing at the zenith.
    #[default]
    Zenith,
    /// Equatorial mount polar-aligned on the north celestial pole.
    NorthCelestialPole,
    /// Equatorial mount polar-aligned on the south celestial pole.
    SouthCelestialPole,
}

/// What a goto does once both axes arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(rename_all = "snake_case")]
pub enum CoordSetMode {
    /// Stop on target.
    Slew,
    /// Stop on target, then follow it across the sky.
    #[default]
    Track,
}

/// Mount section of the simulator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MountConfig {
    /// Human-readable device name (max 32 chars).
    #[serde(default = "default_name")]
    pub name: String<32>,

    /// Alignment of the mount's native frame.
    #[serde(default)]
    pub geometry: MountGeometry,

    /// Rate used for gotos and manual moves.
    #[serde(rename = "slew_rate_deg_per_sec", default = "default_slew_rate")]
    pub slew_rate: DegreesPerSec,

    /// Nominal interval between ticks in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u32,

    /// Behaviour of a goto on arrival.
    #[serde(default)]
    pub coord_set: CoordSetMode,
}

fn default_name() -> String<32> {
    String::try_from("Simple Telescope Simulator").unwrap_or_default()
}

fn default_slew_rate() -> DegreesPerSec {
    DegreesPerSec(2.0)
}

fn default_tick_interval_ms() -> u32 {
    1000
}

impl MountConfig {
    /// Nominal tick interval in seconds.
    pub fn tick_interval_secs(&self) -> f64 {
        self.tick_interval_ms as f64 / 1000.0
    }
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            geometry: MountGeometry::default(),
            slew_rate: default_slew_rate(),
            tick_interval_ms: default_tick_interval_ms(),
            coord_set: CoordSetMode::default(),
        }
    }
}
