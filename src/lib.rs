//! # scope-sim
//!
//! Inertia-free simulator of a two-axis telescope mount.
//!
//! ## Features
//!
//! - **Goto, sync, tracking**: Celestial commands drive two simulated encoder axes
//! - **Circular encoder space**: 1,000,000 steps per revolution with shortest-arc motion
//! - **Pluggable alignment**: An [`AlignmentModel`] is tried first, geometry is the fallback
//! - **Configuration-driven**: Mount, site and alignment settings from TOML files
//! - **no_std compatible**: Core library works without standard library
//! - **embedded-hal 1.0**: The tick driver paces itself with `DelayNs`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scope_sim::{EquatorialCoordinates, Mount, NullAlignment, SystemClock};
//! use scope_sim::{Degrees, Hours};
//!
//! let config = scope_sim::load_config("mount.toml")?;
//!
//! let mut mount = Mount::builder()
//!     .from_config(&config)
//!     .alignment(NullAlignment)
//!     .clock(SystemClock)
//!     .build()?;
//!
//! mount.goto(EquatorialCoordinates::new(Hours(5.92), Degrees(7.4)));
//! loop {
//!     let pointing = mount.tick(1.0);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing, the system clock and `log` output
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod trace;

// Core modules
pub mod axis;
pub mod config;
pub mod error;
pub mod frame;
pub mod mount;

// Re-exports for ergonomic API
pub use axis::{AxisController, AxisId, AxisStatus, Direction, EncoderPosition};
pub use config::{validate_config, CoordSetMode, MountGeometry, ObserverPosition, SimulatorConfig};
pub use error::{Error, Result};
pub use frame::{
    AlignmentDatabase, AlignmentModel, DirectionVector, EquatorialCoordinates, FrameBridge,
    NullAlignment, SyncPoint, TransformSource,
};
pub use mount::{
    Clock, ManualClock, Mount, MountBuilder, MountState, MoveDirection, PointingSink, TickDriver,
};

#[cfg(feature = "std")]
pub use mount::SystemClock;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Degrees, DegreesPerSec, Hours};
