//! Axis module for scope-sim.
//!
//! The circular encoder space and the per-axis motion state machine. Both
//! mount axes are instances of the same [`AxisController`].

mod controller;
mod position;
mod state;

pub use controller::{slew_distance, slew_steps, AxisController, AxisState};
pub use position::{
    degrees_to_steps, normalize, shortest_signed_delta, steps_to_degrees, EncoderPosition,
    STEPS_PER_DEGREE, STEPS_PER_REVOLUTION,
};
pub use state::{AxisId, AxisStatus, Direction};
