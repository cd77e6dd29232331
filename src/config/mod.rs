//! Configuration module for scope-sim.
//!
//! Provides types for loading and validating the simulator configuration
//! from TOML files (with `std` feature) or pre-parsed data.

mod mount;
mod site;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use mount::{CoordSetMode, MountConfig, MountGeometry};
pub use site::ObserverPosition;
pub use system::{AlignmentConfig, SimulatorConfig};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, DegreesPerSec, Hours};
