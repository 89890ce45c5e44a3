//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals/atomics.

pub mod control;
pub mod display;
pub mod encoder;

pub use control::control_task;
pub use display::display_task;
pub use encoder::encoder_task;
