//! Events reported by the control loop
//!
//! Events describe what a tick did. They carry no control meaning; the
//! firmware logs them.

use crate::control::{ButtonId, Slot};

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlEvent {
    // Encoder events
    /// Servo jogged in manual mode (angle after clamping)
    Jogged { angle: u8 },
    /// Playback period changed in playback mode
    PeriodAdjusted { period_ms: u32 },

    // Step switch events
    /// Jog step size advanced
    StepChanged { step: u16 },

    // Button events
    /// Servo moved to a saved slot on a tap
    Jumped { slot: Slot, angle: u8 },
    /// Tap on a slot that holds no angle yet
    JumpSkipped { slot: Slot },
    /// Current angle saved into a slot on a hold
    Saved { slot: Slot, angle: u8 },
    /// Hold on a button that has no save slot
    HoldIgnored { button: ButtonId },
    /// Playback started
    PlaybackStarted,
    /// Playback stopped
    PlaybackStopped,
    /// Playback toggle dropped because a slot is unset
    PlaybackRefused,

    // Scheduler events
    /// Playback moved the servo to a slot
    PlaybackMoved { slot: Slot, angle: u8 },
}
