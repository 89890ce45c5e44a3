//! Control logic
//!
//! The components of the controller, leaf-first, and the loop that
//! drives them.

pub mod actuator;
pub mod buttons;
pub mod controller;
pub mod debounce;
pub mod hold;
pub mod playback;
pub mod positions;
pub mod step;

pub use actuator::{clamp_angle, AngleActuator};
pub use buttons::{binding, ButtonBinding, ButtonId, TapAction, BUTTON_MAP};
pub use controller::{ControlLoop, TickReport, MAX_TICK_EVENTS};
pub use debounce::SwitchDebouncer;
pub use hold::{HoldDetector, PressKind};
pub use playback::PlaybackScheduler;
pub use positions::{PositionStore, Slot};
pub use step::StepSelector;
