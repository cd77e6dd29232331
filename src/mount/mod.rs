//! Mount module for scope-sim.
//!
//! The mount coordinator, its builder, time sources and the tick driver.

mod builder;
mod clock;
mod coordinator;
mod driver;
mod state;

pub use builder::MountBuilder;
#[cfg(feature = "std")]
pub use clock::SystemClock;
pub use clock::{Clock, ManualClock};
pub use coordinator::Mount;
pub use driver::{PointingSink, TickDriver};
pub use state::{MountState, MoveDirection, TrackingTarget};
