//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic and the
//! board. Blocking delays use [`embedded_hal::delay::DelayNs`].

pub mod board;
pub mod input;
pub mod servo;

pub use board::Board;
pub use input::{ControlInputs, MonotonicClock};
pub use servo::ServoOutput;
