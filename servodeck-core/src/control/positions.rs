//! Saved positions (P1/P2)

use super::actuator::AngleActuator;
use crate::traits::ServoOutput;

/// A saved-position slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    P1,
    P2,
}

impl Slot {
    /// The other slot
    pub fn other(self) -> Self {
        match self {
            Slot::P1 => Slot::P2,
            Slot::P2 => Slot::P1,
        }
    }

    fn index(self) -> usize {
        match self {
            Slot::P1 => 0,
            Slot::P2 => 1,
        }
    }
}

/// Two optional saved angles
///
/// Slots start unset and are only ever overwritten, never cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PositionStore {
    slots: [Option<u8>; 2],
}

impl PositionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite `slot` with `angle`
    pub fn save(&mut self, slot: Slot, angle: u8) {
        self.slots[slot.index()] = Some(angle);
    }

    /// Angle saved in `slot`, if any
    pub fn get(&self, slot: Slot) -> Option<u8> {
        self.slots[slot.index()]
    }

    /// Both saved angles, only when both slots are set
    pub fn both(&self) -> Option<(u8, u8)> {
        Some((self.get(Slot::P1)?, self.get(Slot::P2)?))
    }

    /// Move the servo to the angle saved in `slot`
    ///
    /// An unset slot is a no-op and returns `None`.
    pub fn jump_to<S: ServoOutput>(
        &self,
        slot: Slot,
        actuator: &mut AngleActuator,
        servo: &mut S,
    ) -> Option<u8> {
        let angle = self.get(slot)?;
        Some(actuator.apply(servo, i32::from(angle)))
    }
}
