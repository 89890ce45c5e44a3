//! Input and timing traits
//!
//! The control loop polls these once per tick.

use crate::control::ButtonId;

/// Raw operator inputs
///
/// Levels are logical ("active" = pressed), already translated from the
/// pin's electrical polarity.
pub trait ControlInputs {
    /// Absolute encoder count; one unit per detent
    fn encoder_position(&mut self) -> i32;

    /// Whether the encoder push switch is pressed
    fn switch_active(&mut self) -> bool;

    /// Whether a push-button is pressed
    fn button_active(&mut self, button: ButtonId) -> bool;
}

/// Monotonic millisecond clock
///
/// Must never jump backwards. Wraps after ~49 days; consumers use
/// wrapping subtraction.
pub trait MonotonicClock {
    /// Milliseconds since an arbitrary epoch
    fn now_ms(&self) -> u32;
}
