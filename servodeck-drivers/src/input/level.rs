//! Logical level input
//!
//! Translates the electrical level of a pin into "pressed". Buttons wired
//! to 3.3V with a pull-down are active-high; the encoder switch wired to
//! ground with a pull-up is active-low.

use embedded_hal::digital::InputPin;

/// Electrical level that means "pressed"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Pin reads high when pressed (pull-down wiring)
    High,
    /// Pin reads low when pressed (pull-up wiring)
    Low,
}

/// Input pin read as pressed/released
pub struct LevelInput<P> {
    pin: P,
    active: ActiveLevel,
}

impl<P: InputPin> LevelInput<P> {
    /// Wrap a pin
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    /// Active-high input
    pub fn active_high(pin: P) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    /// Active-low input
    pub fn active_low(pin: P) -> Self {
        Self::new(pin, ActiveLevel::Low)
    }

    /// Whether the input is pressed
    ///
    /// A failed read counts as released.
    pub fn is_active(&mut self) -> bool {
        let level = match self.active {
            ActiveLevel::High => self.pin.is_high(),
            ActiveLevel::Low => self.pin.is_low(),
        };
        level.unwrap_or(false)
    }
}
