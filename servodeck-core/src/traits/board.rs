//! Board bundle

use embedded_hal::delay::DelayNs;

use super::{ControlInputs, MonotonicClock, ServoOutput};

/// Everything the control loop touches during a tick
///
/// Implemented automatically for any type providing the individual traits,
/// so a board support struct only implements the pieces.
pub trait Board: ControlInputs + ServoOutput + MonotonicClock + DelayNs {}

impl<T: ControlInputs + ServoOutput + MonotonicClock + DelayNs> Board for T {}
