//! Simulator configuration - root configuration structure.

use serde::Deserialize;

use super::mount::MountConfig;
use super::site::ObserverPosition;

/// Alignment section of the simulator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AlignmentConfig {
    /// Tolerance used by the default duplicate sync point policy, in percent
    /// of the full coordinate range.
    #[serde(default = "default_sync_tolerance_percent")]
    pub sync_tolerance_percent: f64,
}

fn default_sync_tolerance_percent() -> f64 {
    0.1
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            sync_tolerance_percent: default_sync_tolerance_percent(),
        }
    }
}

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulatorConfig {
    /// Mount mechanics and behaviour.
    #[serde(default)]
    pub mount: MountConfig,

    /// Observer position. Without it the frame bridge falls back to a direct
    /// equatorial to mount mapping.
    #[serde(default)]
    pub site: Option<ObserverPosition>,

    /// Alignment subsystem settings.
    #[serde(default)]
    pub alignment: AlignmentConfig,
}

impl SimulatorConfig {
    /// Get the observer position, if configured.
    pub fn observer(&self) -> Option<ObserverPosition> {
        self.site
    }
}
