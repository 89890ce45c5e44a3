//! Controller mode and event types

pub mod events;
pub mod mode;

pub use events::ControlEvent;
pub use mode::Mode;
