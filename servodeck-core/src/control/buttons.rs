//! Button bindings
//!
//! Which slot a hold saves into and what a tap does, per button.

use super::positions::Slot;
use crate::config::BUTTON_COUNT;

/// Physical push-buttons, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    Left,
    Middle,
    Right,
}

impl ButtonId {
    /// All buttons in polling order
    pub const ALL: [ButtonId; BUTTON_COUNT] = [ButtonId::Left, ButtonId::Middle, ButtonId::Right];

    /// Position in [`ButtonId::ALL`]
    pub fn index(self) -> usize {
        match self {
            ButtonId::Left => 0,
            ButtonId::Middle => 1,
            ButtonId::Right => 2,
        }
    }
}

/// Action of a short press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapAction {
    /// Move the servo to a saved slot
    JumpTo(Slot),
    /// Start or stop playback
    TogglePlayback,
}

/// What a button does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonBinding {
    /// Slot a hold saves the current angle into; `None` ignores holds
    pub save_slot: Option<Slot>,
    /// Action of a tap
    pub tap: TapAction,
}

/// Bindings indexed by [`ButtonId::index`]
pub const BUTTON_MAP: [ButtonBinding; BUTTON_COUNT] = [
    ButtonBinding {
        save_slot: Some(Slot::P1),
        tap: TapAction::JumpTo(Slot::P1),
    },
    ButtonBinding {
        save_slot: None,
        tap: TapAction::TogglePlayback,
    },
    ButtonBinding {
        save_slot: Some(Slot::P2),
        tap: TapAction::JumpTo(Slot::P2),
    },
];

/// Binding for `button`
pub fn binding(button: ButtonId) -> ButtonBinding {
    BUTTON_MAP[button.index()]
}
